use pool_interface::types::action::Action;
use pool_interface::types::action_config::ActionConfig;
use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::user_permissions::UserPermissionsInput;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::storage::{read_user_permissions, write_action_config, write_user_permissions};

use super::utils::validation::require_permission;

/// Replaces level, lists and limits. The daily usage and overrides are kept.
pub fn set_user_permissions(
    env: &Env,
    who: &Address,
    account: &Address,
    input: &UserPermissionsInput,
) -> Result<(), Error> {
    require_permission(env, who, &Permission::ManageUsers)?;

    assert_with_error!(
        env,
        !(input.whitelisted && input.blacklisted),
        Error::InvalidConfig
    );
    assert_with_error!(
        env,
        input.max_deposit >= 0 && input.max_borrow >= 0 && input.daily_limit >= 0,
        Error::InvalidConfig
    );

    let mut permissions = read_user_permissions(env, account);
    permissions.level = input.level;
    permissions.whitelisted = input.whitelisted;
    permissions.blacklisted = input.blacklisted;
    permissions.max_deposit = input.max_deposit;
    permissions.max_borrow = input.max_borrow;
    permissions.daily_limit = input.daily_limit;

    write_user_permissions(env, account, &permissions);

    Ok(())
}

/// `None` removes the override
pub fn set_action_override(
    env: &Env,
    who: &Address,
    account: &Address,
    action: Action,
    allowed: Option<bool>,
) -> Result<(), Error> {
    require_permission(env, who, &Permission::ManageUsers)?;

    let mut permissions = read_user_permissions(env, account);

    match allowed {
        Some(allowed) => permissions.overrides.set(action, allowed),
        None => {
            permissions.overrides.remove(action);
        }
    }

    write_user_permissions(env, account, &permissions);

    Ok(())
}

pub fn set_action_config(
    env: &Env,
    who: &Address,
    action: Action,
    config: &ActionConfig,
) -> Result<(), Error> {
    require_permission(env, who, &Permission::ManageUsers)?;

    write_action_config(env, action, config);

    Ok(())
}
