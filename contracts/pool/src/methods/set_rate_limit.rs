use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::rate_limit::RateLimit;
use soroban_sdk::{Address, Env};

use crate::storage::write_rate_limit;

use super::utils::validation::{require_permission, require_valid_rate_limit};

pub fn set_rate_limit(env: &Env, who: &Address, action: Action, limit: &RateLimit) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetRateLimits)?;
    require_valid_rate_limit(env, limit);

    write_rate_limit(env, action, limit);

    Ok(())
}
