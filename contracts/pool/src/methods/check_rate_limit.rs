use pool_interface::types::action::Action;
use pool_interface::types::rate_limit_status::RateLimitStatus;
use soroban_sdk::{Address, Env};

use crate::types::rate_limiter::RateLimiter;

/// Consumes one admission and keeps the outcome, blocks included
pub fn check_rate_limit(env: &Env, who: &Address, action: Action) -> RateLimitStatus {
    who.require_auth();

    RateLimiter::new(env, who, action).consume()
}

pub fn rate_limit_status(env: &Env, account: &Address, action: Action) -> RateLimitStatus {
    RateLimiter::new(env, account, action).status()
}
