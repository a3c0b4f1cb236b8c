use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_asset_config, write_asset_config};

use super::utils::validation::require_permission;

pub fn set_asset_status(env: &Env, who: &Address, asset: &Address, active: bool) -> Result<(), Error> {
    require_permission(env, who, &Permission::ManageAssets)?;

    let mut config = read_asset_config(env, asset)?;
    config.active = active;
    write_asset_config(env, &config);

    if active {
        event::asset_activated(env, asset);
    } else {
        event::asset_deactivated(env, asset);
    }

    Ok(())
}
