use pool_interface::types::chain_config::ChainConfig;
use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use soroban_sdk::{Address, Env};

use crate::storage::write_chain;

use super::utils::validation::require_permission;

pub fn set_chain(env: &Env, who: &Address, config: &ChainConfig) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetChains)?;

    write_chain(env, config);

    Ok(())
}
