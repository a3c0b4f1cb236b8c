use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::pool_config::PoolConfig;
use pool_interface::types::protocol_state::ProtocolState;
use soroban_sdk::{vec, Address, Env};

use crate::event;
use crate::storage::{write_config, write_permission_owners, write_protocol_state};

use super::utils::validation::{require_not_initialized, require_valid_pool_config};

const PERMISSIONS: [Permission; 13] = [
    Permission::Permission,
    Permission::ManageAssets,
    Permission::ManageUsers,
    Permission::SetChains,
    Permission::SetFallbackPrice,
    Permission::SetLiquidationParams,
    Permission::SetPause,
    Permission::SetPoolConfiguration,
    Permission::SetPriceFeeds,
    Permission::SetRateLimits,
    Permission::EmergencyOperator,
    Permission::Liquidator,
    Permission::Keeper,
];

pub fn initialize(env: &Env, admin: &Address, config: &PoolConfig) -> Result<(), Error> {
    require_not_initialized(env);
    require_valid_pool_config(env, config);

    let owners = vec![env, admin.clone()];

    for permission in PERMISSIONS.iter() {
        write_permission_owners(env, &owners, permission);
    }

    write_config(env, config);
    write_protocol_state(env, &ProtocolState::default());

    event::initialized(env, admin, config);

    Ok(())
}
