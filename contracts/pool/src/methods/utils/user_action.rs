use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_account_risk, write_account_risk};
use crate::types::access_control::AccessControl;
use crate::types::rate_limiter::RateLimiter;

/// Access checks and rate limiting shared by every user operation.
/// Returns the account access control for the cap and daily limit checks.
pub fn require_user_action<'a>(
    env: &'a Env,
    who: &'a Address,
    action: Action,
) -> Result<AccessControl<'a>, Error> {
    let access = AccessControl::new(env, who);
    access.require_action(action)?;

    RateLimiter::new(env, who, action).require_admission()?;

    record_activity(env, who);

    Ok(access)
}

pub fn record_activity(env: &Env, account: &Address) {
    let mut risk = read_account_risk(env, account);
    risk.last_activity = env.ledger().timestamp();
    write_account_risk(env, account, &risk);
}
