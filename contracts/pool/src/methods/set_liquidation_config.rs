use pool_interface::types::error::Error;
use pool_interface::types::liquidation_config::LiquidationConfig;
use pool_interface::types::permission::Permission;
use soroban_sdk::{Address, Env};

use crate::storage::{read_asset_config, write_liquidation_config};

use super::utils::validation::{require_permission, require_valid_liquidation_config};

pub fn set_liquidation_config(
    env: &Env,
    who: &Address,
    asset: &Address,
    config: &LiquidationConfig,
) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetLiquidationParams)?;
    require_valid_liquidation_config(env, config);

    read_asset_config(env, asset)?;
    write_liquidation_config(env, asset, config);

    Ok(())
}
