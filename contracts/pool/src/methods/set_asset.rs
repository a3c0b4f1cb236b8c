use pool_interface::types::asset_config::AssetConfig;
use pool_interface::types::asset_config_input::AssetConfigInput;
use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::user_config::MAX_ASSETS;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_asset_config, read_assets, write_asset_config, write_assets};

use super::utils::validation::{require_permission, require_valid_asset_config};

/// Adds an asset or updates its parameters. Updates keep the index and the active flag.
pub fn set_asset(env: &Env, who: &Address, input: &AssetConfigInput) -> Result<(), Error> {
    require_permission(env, who, &Permission::ManageAssets)?;
    require_valid_asset_config(env, input);

    let config = match read_asset_config(env, &input.asset) {
        Ok(current) => {
            let mut config = AssetConfig::new(input, current.index);
            config.active = current.active;
            config
        }
        Err(_) => {
            let mut assets = read_assets(env);
            let index = assets.len();

            if index >= MAX_ASSETS {
                return Err(Error::AssetsMaxCapacityExceeded);
            }

            assets.push_back(input.asset.clone());
            write_assets(env, &assets);

            AssetConfig::new(input, index)
        }
    };

    write_asset_config(env, &config);

    event::asset_configured(env, &config);

    Ok(())
}
