#![deny(warnings)]
#![no_std]

use methods::{
    borrow_cross_chain::{borrow_cross_chain, quote_cross_chain_borrow},
    check_rate_limit::{check_rate_limit, rate_limit_status},
    deposit::deposit,
    get_price::{get_price, get_prices},
    grant_permission::grant_permission,
    health_monitor::{
        execute_liquidation_request, on_random_fulfilled, perform_upkeep, request_liquidation,
    },
    initialize::initialize,
    liquidate::{batch_liquidate, liquidate},
    receive_message::receive_message,
    refresh::{health_factor, refresh},
    repay::repay,
    repay_cross_chain::repay_cross_chain,
    revoke_permission::revoke_permission,
    set_asset::set_asset,
    set_asset_status::set_asset_status,
    set_chain::set_chain,
    set_emergency_mode::set_emergency_mode,
    set_fallback_price::set_fallback_price,
    set_liquidation_config::set_liquidation_config,
    set_pause::set_pause,
    set_pool_configuration::set_pool_configuration,
    set_price_feeds::set_price_feeds,
    set_rate_limit::set_rate_limit,
    set_user_permissions::{set_action_config, set_action_override, set_user_permissions},
    withdraw::withdraw,
};
use pool_interface::types::{
    account_position::AccountPosition,
    account_risk::AccountRisk,
    action::Action,
    action_config::ActionConfig,
    asset_config::AssetConfig,
    asset_config_input::AssetConfigInput,
    asset_price::AssetPrice,
    chain_config::ChainConfig,
    error::Error,
    fallback_price::FallbackPrice,
    liquidation_call::{LiquidationCall, LiquidationOutcome},
    liquidation_config::LiquidationConfig,
    liquidation_opportunity::LiquidationOpportunity,
    liquidation_quote::LiquidationQuote,
    liquidation_request::LiquidationRequest,
    liquidation_result::LiquidationResult,
    permission::Permission,
    pool_config::PoolConfig,
    position::Position,
    price_feed_config::PriceFeedConfig,
    price_feed_config_input::PriceFeedConfigInput,
    protocol_state::ProtocolState,
    rate_limit::RateLimit,
    rate_limit_status::RateLimitStatus,
    upkeep_report::UpkeepReport,
    user_permissions::{UserPermissions, UserPermissionsInput},
};
use pool_interface::LendingPoolTrait;
use soroban_sdk::{contract, contractimpl, vec, Address, Bytes, BytesN, Env, Vec};
use types::access_control::AccessControl;
use types::liquidation_engine;

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPoolTrait for LendingPool {
    fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error> {
        initialize(&env, &admin, &config)
    }

    fn version() -> u32 {
        1
    }

    fn set_pool_configuration(env: Env, who: Address, config: PoolConfig) -> Result<(), Error> {
        set_pool_configuration(&env, &who, &config)
    }

    fn pool_configuration(env: Env) -> Result<PoolConfig, Error> {
        read_config(&env)
    }

    fn grant_permission(
        env: Env,
        who: Address,
        receiver: Address,
        permission: Permission,
    ) -> Result<(), Error> {
        grant_permission(&env, &who, &receiver, &permission)
    }

    fn revoke_permission(
        env: Env,
        who: Address,
        owner: Address,
        permission: Permission,
    ) -> Result<(), Error> {
        revoke_permission(&env, &who, &owner, &permission)
    }

    fn permissioned(env: Env, permission: Permission) -> Vec<Address> {
        read_permission_owners(&env, &permission)
    }

    fn set_pause(env: Env, who: Address, value: bool) -> Result<(), Error> {
        set_pause(&env, &who, value)
    }

    fn set_emergency_mode(env: Env, who: Address, value: bool) -> Result<(), Error> {
        set_emergency_mode(&env, &who, value)
    }

    fn protocol_state(env: Env) -> ProtocolState {
        read_protocol_state(&env)
    }

    fn set_asset(env: Env, who: Address, input: AssetConfigInput) -> Result<(), Error> {
        set_asset(&env, &who, &input)
    }

    fn set_asset_status(
        env: Env,
        who: Address,
        asset: Address,
        active: bool,
    ) -> Result<(), Error> {
        set_asset_status(&env, &who, &asset, active)
    }

    fn asset_config(env: Env, asset: Address) -> Result<AssetConfig, Error> {
        read_asset_config(&env, &asset)
    }

    fn assets(env: Env) -> Vec<AssetConfig> {
        let mut configs = vec![&env];

        for asset in read_assets(&env) {
            if let Ok(config) = read_asset_config(&env, &asset) {
                configs.push_back(config);
            }
        }

        configs
    }

    fn set_price_feeds(
        env: Env,
        who: Address,
        inputs: Vec<PriceFeedConfigInput>,
    ) -> Result<(), Error> {
        set_price_feeds(&env, &who, &inputs)
    }

    fn price_feed(env: Env, asset: Address) -> Option<PriceFeedConfig> {
        read_price_feed(&env, &asset)
    }

    fn set_fallback_price(
        env: Env,
        who: Address,
        asset: Address,
        price: i128,
    ) -> Result<(), Error> {
        set_fallback_price(&env, &who, &asset, price)
    }

    fn fallback_price(env: Env, asset: Address) -> Option<FallbackPrice> {
        read_fallback_price(&env, &asset)
    }

    fn get_price(env: Env, asset: Address) -> Result<AssetPrice, Error> {
        get_price(&env, &asset)
    }

    fn get_prices(env: Env, assets: Vec<Address>) -> Vec<AssetPrice> {
        get_prices(&env, &assets)
    }

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error> {
        deposit(&env, &who, &asset, amount)
    }

    fn withdraw(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), Error> {
        withdraw(&env, &who, &asset, amount, &to)
    }

    fn repay(env: Env, who: Address, asset: Address, amount: i128) -> Result<i128, Error> {
        repay(&env, &who, &asset, amount)
    }

    fn refresh(env: Env, account: Address) -> Result<AccountPosition, Error> {
        refresh(&env, &account)
    }

    fn position(env: Env, account: Address, asset: Address) -> Position {
        read_position(&env, &account, &asset)
    }

    fn account_position(env: Env, account: Address) -> AccountPosition {
        read_account_position(&env, &account).unwrap_or_default()
    }

    fn health_factor(env: Env, account: Address) -> Result<i128, Error> {
        health_factor(&env, &account)
    }

    fn set_liquidation_config(
        env: Env,
        who: Address,
        asset: Address,
        config: LiquidationConfig,
    ) -> Result<(), Error> {
        set_liquidation_config(&env, &who, &asset, &config)
    }

    fn liquidation_config(env: Env, asset: Address) -> LiquidationConfig {
        read_liquidation_config(&env, &asset)
    }

    fn can_liquidate(env: Env, account: Address) -> Result<bool, Error> {
        liquidation_engine::can_liquidate(&env, &account)
    }

    fn calculate_liquidation(
        env: Env,
        account: Address,
        collateral_asset: Address,
        debt_asset: Address,
    ) -> Result<LiquidationQuote, Error> {
        liquidation_engine::calculate_liquidation(&env, &account, &collateral_asset, &debt_asset)
    }

    fn liquidate(
        env: Env,
        liquidator: Address,
        account: Address,
        collateral_asset: Address,
        debt_asset: Address,
        debt_amount: i128,
    ) -> Result<LiquidationResult, Error> {
        liquidate(
            &env,
            &liquidator,
            &account,
            &collateral_asset,
            &debt_asset,
            debt_amount,
        )
    }

    fn batch_liquidate(
        env: Env,
        liquidator: Address,
        calls: Vec<LiquidationCall>,
    ) -> Result<Vec<LiquidationOutcome>, Error> {
        batch_liquidate(&env, &liquidator, &calls)
    }

    fn liquidation_opportunities(env: Env) -> Result<Vec<LiquidationOpportunity>, Error> {
        liquidation_engine::liquidation_opportunities(&env)
    }

    fn set_chain(env: Env, who: Address, config: ChainConfig) -> Result<(), Error> {
        set_chain(&env, &who, &config)
    }

    fn chain(env: Env, chain_id: u64) -> Option<ChainConfig> {
        read_chain(&env, chain_id)
    }

    fn quote_cross_chain_borrow(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        destination_chain: u64,
        receiver: Address,
    ) -> Result<i128, Error> {
        quote_cross_chain_borrow(&env, &who, &asset, amount, destination_chain, &receiver)
    }

    fn borrow_cross_chain(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        destination_chain: u64,
        receiver: Address,
    ) -> Result<BytesN<32>, Error> {
        borrow_cross_chain(&env, &who, &asset, amount, destination_chain, &receiver)
    }

    fn repay_cross_chain(
        env: Env,
        who: Address,
        account: Address,
        asset: Address,
        amount: i128,
        destination_chain: u64,
    ) -> Result<BytesN<32>, Error> {
        repay_cross_chain(&env, &who, &account, &asset, amount, destination_chain)
    }

    fn receive_message(env: Env, message_id: BytesN<32>, payload: Bytes) -> Result<(), Error> {
        receive_message(&env, &message_id, &payload)
    }

    fn is_message_processed(env: Env, message_id: BytesN<32>) -> bool {
        is_message_processed(&env, &message_id)
    }

    fn synthetic_debt(env: Env, account: Address, asset: Address, chain_id: u64) -> i128 {
        read_synthetic_debt(&env, &account, &asset, chain_id)
    }

    fn nonce(env: Env, account: Address) -> u64 {
        read_nonce(&env, &account)
    }

    fn set_rate_limit(
        env: Env,
        who: Address,
        action: Action,
        limit: RateLimit,
    ) -> Result<(), Error> {
        set_rate_limit(&env, &who, action, &limit)
    }

    fn rate_limit(env: Env, action: Action) -> Option<RateLimit> {
        read_rate_limit(&env, action)
    }

    fn rate_limit_status(env: Env, account: Address, action: Action) -> RateLimitStatus {
        rate_limit_status(&env, &account, action)
    }

    fn check_rate_limit(env: Env, who: Address, action: Action) -> RateLimitStatus {
        check_rate_limit(&env, &who, action)
    }

    fn set_user_permissions(
        env: Env,
        who: Address,
        account: Address,
        input: UserPermissionsInput,
    ) -> Result<(), Error> {
        set_user_permissions(&env, &who, &account, &input)
    }

    fn user_permissions(env: Env, account: Address) -> UserPermissions {
        read_user_permissions(&env, &account)
    }

    fn set_action_override(
        env: Env,
        who: Address,
        account: Address,
        action: Action,
        allowed: Option<bool>,
    ) -> Result<(), Error> {
        set_action_override(&env, &who, &account, action, allowed)
    }

    fn set_action_config(
        env: Env,
        who: Address,
        action: Action,
        config: ActionConfig,
    ) -> Result<(), Error> {
        set_action_config(&env, &who, action, &config)
    }

    fn can_perform_action(env: Env, account: Address, action: Action) -> bool {
        AccessControl::new(&env, &account).can_perform(action)
    }

    fn perform_upkeep(env: Env, keeper: Address) -> Result<UpkeepReport, Error> {
        perform_upkeep(&env, &keeper)
    }

    fn risk_score(env: Env, account: Address) -> AccountRisk {
        read_account_risk(&env, &account)
    }

    fn request_liquidation(env: Env, requester: Address, account: Address) -> Result<u64, Error> {
        request_liquidation(&env, &requester, &account)
    }

    fn on_random_fulfilled(env: Env, request_id: u64, value: u64) -> Result<(), Error> {
        on_random_fulfilled(&env, request_id, value)
    }

    fn execute_liquidation_request(
        env: Env,
        liquidator: Address,
        request_id: u64,
        collateral_asset: Address,
        debt_asset: Address,
        debt_amount: i128,
    ) -> Result<LiquidationResult, Error> {
        execute_liquidation_request(
            &env,
            &liquidator,
            request_id,
            &collateral_asset,
            &debt_asset,
            debt_amount,
        )
    }

    fn liquidation_request(env: Env, request_id: u64) -> Option<LiquidationRequest> {
        read_liquidation_request(&env, request_id).ok()
    }
}
