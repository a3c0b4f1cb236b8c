use common::PERCENTAGE_FACTOR;
use pool_interface::types::asset_config::AssetConfig;
use pool_interface::types::asset_config_input::AssetConfigInput;
use pool_interface::types::error::Error;
use pool_interface::types::liquidation_config::{LiquidationConfig, MAX_LIQUIDATION_BONUS};
use pool_interface::types::permission::Permission;
use pool_interface::types::pool_config::PoolConfig;
use pool_interface::types::rate_limit::{RateLimit, RateLimitAlgorithm};
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_config, read_permission_owners, read_protocol_state};

pub fn require_not_initialized(env: &Env) {
    if has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_permission(env: &Env, who: &Address, permission: &Permission) -> Result<(), Error> {
    who.require_auth();

    let owners = read_permission_owners(env, permission);

    if owners.binary_search(who).is_err() {
        return Err(Error::NotAuthorized);
    }

    Ok(())
}

pub fn has_permission(env: &Env, who: &Address, permission: &Permission) -> bool {
    read_permission_owners(env, permission)
        .binary_search(who)
        .is_ok()
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if read_protocol_state(env).paused {
        return Err(Error::Paused);
    }

    Ok(())
}

pub fn require_positive_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    Ok(())
}

pub fn require_active_asset(config: &AssetConfig) -> Result<(), Error> {
    if !config.active {
        return Err(Error::AssetNotActive);
    }

    Ok(())
}

pub fn require_collateral_enabled(config: &AssetConfig) -> Result<(), Error> {
    require_active_asset(config)?;

    if !config.collateral_enabled {
        return Err(Error::CollateralNotEnabled);
    }

    Ok(())
}

pub fn require_borrowing_enabled(config: &AssetConfig) -> Result<(), Error> {
    require_active_asset(config)?;

    if !config.borrow_enabled {
        return Err(Error::BorrowingNotEnabled);
    }

    Ok(())
}

pub fn require_lte_percentage_factor(env: &Env, value: u32) {
    assert_with_error!(
        env,
        value <= PERCENTAGE_FACTOR,
        Error::MustBeLtePercentageFactor
    );
}

pub fn require_positive(env: &Env, value: i128) {
    assert_with_error!(env, value > 0, Error::MustBePositive);
}

pub fn require_valid_asset_config(env: &Env, input: &AssetConfigInput) {
    require_lte_percentage_factor(env, input.ltv);
    require_lte_percentage_factor(env, input.liquidation_threshold);

    assert_with_error!(
        env,
        input.ltv <= input.liquidation_threshold,
        Error::InvalidConfig
    );
    assert_with_error!(env, input.decimals <= 38, Error::InvalidConfig);
}

pub fn require_valid_liquidation_config(env: &Env, config: &LiquidationConfig) {
    require_lte_percentage_factor(env, config.close_factor);

    assert_with_error!(
        env,
        config.bonus <= MAX_LIQUIDATION_BONUS,
        Error::InvalidConfig
    );
    assert_with_error!(env, config.threshold > 0, Error::InvalidConfig);
}

pub fn require_valid_pool_config(env: &Env, config: &PoolConfig) {
    require_positive(env, config.critical_health_factor);

    assert_with_error!(
        env,
        config.security_pause_threshold <= 100,
        Error::InvalidConfig
    );
}

pub fn require_valid_rate_limit(env: &Env, limit: &RateLimit) {
    let valid = match limit.algorithm {
        RateLimitAlgorithm::FixedWindow | RateLimitAlgorithm::SlidingWindow => {
            limit.window > 0 && limit.max_requests > 0
        }
        RateLimitAlgorithm::TokenBucket => {
            limit.bucket_size > 0 && limit.refill_period > 0 && limit.refill_rate > 0
        }
    };

    assert_with_error!(env, valid, Error::InvalidConfig);
}
