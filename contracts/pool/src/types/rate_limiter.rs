use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use pool_interface::types::rate_limit::{RateLimit, RateLimitAlgorithm};
use pool_interface::types::rate_limit_status::RateLimitStatus;
use pool_interface::types::user_rate_state::UserRateState;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    read_protocol_state, read_rate_limit, read_user_permissions, read_user_rate_state,
    write_user_rate_state,
};

/// Per (account, action) admission control
pub struct RateLimiter<'a> {
    env: &'a Env,
    account: &'a Address,
    action: Action,
}

impl<'a> RateLimiter<'a> {
    pub fn new(env: &'a Env, account: &'a Address, action: Action) -> Self {
        Self {
            env,
            account,
            action,
        }
    }

    /// Consumes one admission and stores the resulting state, escalation included
    pub fn consume(&self) -> RateLimitStatus {
        let now = self.env.ledger().timestamp();

        if let Some(status) = self.emergency_rejection(now) {
            return status;
        }

        let limit = match read_rate_limit(self.env, self.action) {
            Some(limit) if limit.enabled => limit,
            _ => return unlimited(),
        };

        let mut state = read_user_rate_state(self.env, self.account, self.action);
        let blocked_before = state.blocked_until;
        let status = admit(&limit, &mut state, now);

        write_user_rate_state(self.env, self.account, self.action, &state);

        if state.blocked_until > blocked_before {
            event::account_blocked(self.env, self.account, state.blocked_until);
        }

        status
    }

    /// Same as `consume` but fails with `RateLimited` on rejection
    pub fn require_admission(&self) -> Result<(), Error> {
        let now = self.env.ledger().timestamp();

        if self.emergency_rejection(now).is_some() {
            return Err(Error::EmergencyMode);
        }

        if self.consume().allowed {
            Ok(())
        } else {
            Err(Error::RateLimited)
        }
    }

    /// Current status without consuming
    pub fn status(&self) -> RateLimitStatus {
        let now = self.env.ledger().timestamp();

        if let Some(status) = self.emergency_rejection(now) {
            return status;
        }

        match read_rate_limit(self.env, self.action) {
            Some(limit) if limit.enabled => {
                let mut state = read_user_rate_state(self.env, self.account, self.action);
                peek(&limit, &mut state, now)
            }
            _ => unlimited(),
        }
    }

    /// Emergency mode admits whitelisted accounts only
    fn emergency_rejection(&self, now: u64) -> Option<RateLimitStatus> {
        if !read_protocol_state(self.env).emergency_mode {
            return None;
        }

        if read_user_permissions(self.env, self.account).whitelisted {
            return None;
        }

        Some(RateLimitStatus {
            allowed: false,
            remaining: 0,
            reset_at: now,
            retry_after: 0,
            blocked_until: 0,
        })
    }
}

fn unlimited() -> RateLimitStatus {
    RateLimitStatus {
        allowed: true,
        remaining: u32::MAX,
        reset_at: 0,
        retry_after: 0,
        blocked_until: 0,
    }
}

/// Brings the window or bucket of `state` up to `now` and reports the
/// admission an attempt at `now` would get.
pub fn peek(limit: &RateLimit, state: &mut UserRateState, now: u64) -> RateLimitStatus {
    if state.blocked_until > now {
        return RateLimitStatus {
            allowed: false,
            remaining: 0,
            reset_at: state.blocked_until,
            retry_after: state.blocked_until - now,
            blocked_until: state.blocked_until,
        };
    }

    match limit.algorithm {
        RateLimitAlgorithm::FixedWindow | RateLimitAlgorithm::SlidingWindow => {
            roll_window(limit, state, now);

            let remaining = limit.max_requests.saturating_sub(state.request_count);
            let reset_at = state.window_start.saturating_add(limit.window);

            RateLimitStatus {
                allowed: remaining > 0,
                remaining,
                reset_at,
                retry_after: if remaining > 0 { 0 } else { reset_at.saturating_sub(now) },
                blocked_until: state.blocked_until,
            }
        }
        RateLimitAlgorithm::TokenBucket => {
            refill(limit, state, now);

            let reset_at = state.last_refill.saturating_add(limit.refill_period.max(1));

            RateLimitStatus {
                allowed: state.tokens > 0,
                remaining: state.tokens,
                reset_at,
                retry_after: if state.tokens > 0 {
                    0
                } else {
                    reset_at.saturating_sub(now).max(1)
                },
                blocked_until: state.blocked_until,
            }
        }
    }
}

/// Admits or rejects one attempt at `now`, updating `state`.
/// A rejection blocks the account for `base_block_duration`, doubled when the
/// previous violation happened within the same window. The window of a token
/// bucket starts at its last refill.
pub fn admit(limit: &RateLimit, state: &mut UserRateState, now: u64) -> RateLimitStatus {
    let mut status = peek(limit, state, now);

    if state.blocked_until > now {
        return status;
    }

    if status.allowed {
        match limit.algorithm {
            RateLimitAlgorithm::FixedWindow | RateLimitAlgorithm::SlidingWindow => {
                state.request_count += 1;
            }
            RateLimitAlgorithm::TokenBucket => {
                state.tokens -= 1;
            }
        }

        status.remaining -= 1;
        return status;
    }

    let window_start = match limit.algorithm {
        RateLimitAlgorithm::TokenBucket => state.last_refill,
        _ => state.window_start,
    };
    let repeated = state
        .last_violation
        .map(|at| at >= window_start)
        .unwrap_or(false);
    let duration = if repeated {
        limit.base_block_duration.saturating_mul(2)
    } else {
        limit.base_block_duration
    };

    state.blocked_until = now.saturating_add(duration);
    state.last_violation = Some(now);

    status.blocked_until = state.blocked_until;
    status.retry_after = duration.max(status.retry_after);

    status
}

fn roll_window(limit: &RateLimit, state: &mut UserRateState, now: u64) {
    let window = limit.window.max(1);

    match limit.algorithm {
        RateLimitAlgorithm::FixedWindow => {
            let current = now / window * window;

            if current > state.window_start || state.request_count == 0 {
                state.window_start = current;
                state.request_count = 0;
            }
        }
        _ => {
            if state.request_count == 0 || now >= state.window_start.saturating_add(window) {
                state.window_start = now;
                state.request_count = 0;
            }
        }
    }
}

fn refill(limit: &RateLimit, state: &mut UserRateState, now: u64) {
    if !state.bucket_initialized {
        state.tokens = limit.bucket_size;
        state.last_refill = now;
        state.bucket_initialized = true;
        return;
    }

    let period = limit.refill_period.max(1);
    let periods = now.saturating_sub(state.last_refill) / period;

    if periods == 0 {
        return;
    }

    let added = periods.saturating_mul(limit.refill_rate as u64);
    let tokens = (state.tokens as u64).saturating_add(added);

    state.tokens = tokens.min(limit.bucket_size as u64) as u32;
    state.last_refill = state.last_refill.saturating_add(periods * period);
}
