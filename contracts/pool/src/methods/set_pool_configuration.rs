use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::pool_config::PoolConfig;
use soroban_sdk::{Address, Env};

use crate::storage::{read_config, write_config};

use super::utils::validation::{require_permission, require_valid_pool_config};

pub fn set_pool_configuration(env: &Env, who: &Address, config: &PoolConfig) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetPoolConfiguration)?;
    require_valid_pool_config(env, config);

    // the local chain id identifies received messages and never changes
    if read_config(env)?.chain_id != config.chain_id {
        return Err(Error::InvalidConfig);
    }

    write_config(env, config);

    Ok(())
}
