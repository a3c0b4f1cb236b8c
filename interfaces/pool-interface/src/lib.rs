#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, BytesN, Env, Vec};
use types::account_position::AccountPosition;
use types::account_risk::AccountRisk;
use types::action::Action;
use types::action_config::ActionConfig;
use types::asset_config::AssetConfig;
use types::asset_config_input::AssetConfigInput;
use types::asset_price::AssetPrice;
use types::chain_config::ChainConfig;
use types::error::Error;
use types::fallback_price::FallbackPrice;
use types::liquidation_call::{LiquidationCall, LiquidationOutcome};
use types::liquidation_config::LiquidationConfig;
use types::liquidation_opportunity::LiquidationOpportunity;
use types::liquidation_quote::LiquidationQuote;
use types::liquidation_request::LiquidationRequest;
use types::liquidation_result::LiquidationResult;
use types::permission::Permission;
use types::pool_config::PoolConfig;
use types::position::Position;
use types::price_feed_config::PriceFeedConfig;
use types::price_feed_config_input::PriceFeedConfigInput;
use types::protocol_state::ProtocolState;
use types::rate_limit::RateLimit;
use types::rate_limit_status::RateLimitStatus;
use types::upkeep_report::UpkeepReport;
use types::user_permissions::{UserPermissions, UserPermissionsInput};

pub mod types;

pub struct Spec;

/// Interface for the cross-chain lending pool
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error>;

    fn version() -> u32;

    fn set_pool_configuration(env: Env, who: Address, config: PoolConfig) -> Result<(), Error>;

    fn pool_configuration(env: Env) -> Result<PoolConfig, Error>;

    fn grant_permission(
        env: Env,
        who: Address,
        receiver: Address,
        permission: Permission,
    ) -> Result<(), Error>;

    fn revoke_permission(
        env: Env,
        who: Address,
        owner: Address,
        permission: Permission,
    ) -> Result<(), Error>;

    fn permissioned(env: Env, permission: Permission) -> Vec<Address>;

    // Protocol state

    fn set_pause(env: Env, who: Address, value: bool) -> Result<(), Error>;

    fn set_emergency_mode(env: Env, who: Address, value: bool) -> Result<(), Error>;

    fn protocol_state(env: Env) -> ProtocolState;

    // Asset catalog

    fn set_asset(env: Env, who: Address, input: AssetConfigInput) -> Result<(), Error>;

    fn set_asset_status(env: Env, who: Address, asset: Address, active: bool)
        -> Result<(), Error>;

    fn asset_config(env: Env, asset: Address) -> Result<AssetConfig, Error>;

    fn assets(env: Env) -> Vec<AssetConfig>;

    // Price oracle

    fn set_price_feeds(
        env: Env,
        who: Address,
        inputs: Vec<PriceFeedConfigInput>,
    ) -> Result<(), Error>;

    fn price_feed(env: Env, asset: Address) -> Option<PriceFeedConfig>;

    fn set_fallback_price(env: Env, who: Address, asset: Address, price: i128)
        -> Result<(), Error>;

    fn fallback_price(env: Env, asset: Address) -> Option<FallbackPrice>;

    fn get_price(env: Env, asset: Address) -> Result<AssetPrice, Error>;

    fn get_prices(env: Env, assets: Vec<Address>) -> Vec<AssetPrice>;

    // Position ledger

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error>;

    fn withdraw(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), Error>;

    fn repay(env: Env, who: Address, asset: Address, amount: i128) -> Result<i128, Error>;

    fn refresh(env: Env, account: Address) -> Result<AccountPosition, Error>;

    fn position(env: Env, account: Address, asset: Address) -> Position;

    fn account_position(env: Env, account: Address) -> AccountPosition;

    fn health_factor(env: Env, account: Address) -> Result<i128, Error>;

    // Liquidation engine

    fn set_liquidation_config(
        env: Env,
        who: Address,
        asset: Address,
        config: LiquidationConfig,
    ) -> Result<(), Error>;

    fn liquidation_config(env: Env, asset: Address) -> LiquidationConfig;

    fn can_liquidate(env: Env, account: Address) -> Result<bool, Error>;

    fn calculate_liquidation(
        env: Env,
        account: Address,
        collateral_asset: Address,
        debt_asset: Address,
    ) -> Result<LiquidationQuote, Error>;

    fn liquidate(
        env: Env,
        liquidator: Address,
        account: Address,
        collateral_asset: Address,
        debt_asset: Address,
        debt_amount: i128,
    ) -> Result<LiquidationResult, Error>;

    fn batch_liquidate(
        env: Env,
        liquidator: Address,
        calls: Vec<LiquidationCall>,
    ) -> Result<Vec<LiquidationOutcome>, Error>;

    fn liquidation_opportunities(env: Env) -> Result<Vec<LiquidationOpportunity>, Error>;

    // Cross-chain messenger

    fn set_chain(env: Env, who: Address, config: ChainConfig) -> Result<(), Error>;

    fn chain(env: Env, chain_id: u64) -> Option<ChainConfig>;

    fn quote_cross_chain_borrow(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        destination_chain: u64,
        receiver: Address,
    ) -> Result<i128, Error>;

    fn borrow_cross_chain(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        destination_chain: u64,
        receiver: Address,
    ) -> Result<BytesN<32>, Error>;

    fn repay_cross_chain(
        env: Env,
        who: Address,
        account: Address,
        asset: Address,
        amount: i128,
        destination_chain: u64,
    ) -> Result<BytesN<32>, Error>;

    fn receive_message(env: Env, message_id: BytesN<32>, payload: Bytes) -> Result<(), Error>;

    fn is_message_processed(env: Env, message_id: BytesN<32>) -> bool;

    /// Synthetic debt of `account` backed by collateral on `chain_id`
    fn synthetic_debt(env: Env, account: Address, asset: Address, chain_id: u64) -> i128;

    fn nonce(env: Env, account: Address) -> u64;

    // Rate limiter

    fn set_rate_limit(
        env: Env,
        who: Address,
        action: Action,
        limit: RateLimit,
    ) -> Result<(), Error>;

    fn rate_limit(env: Env, action: Action) -> Option<RateLimit>;

    fn rate_limit_status(env: Env, account: Address, action: Action) -> RateLimitStatus;

    fn check_rate_limit(env: Env, who: Address, action: Action) -> RateLimitStatus;

    // Access control

    fn set_user_permissions(
        env: Env,
        who: Address,
        account: Address,
        input: UserPermissionsInput,
    ) -> Result<(), Error>;

    fn user_permissions(env: Env, account: Address) -> UserPermissions;

    fn set_action_override(
        env: Env,
        who: Address,
        account: Address,
        action: Action,
        allowed: Option<bool>,
    ) -> Result<(), Error>;

    fn set_action_config(
        env: Env,
        who: Address,
        action: Action,
        config: ActionConfig,
    ) -> Result<(), Error>;

    fn can_perform_action(env: Env, account: Address, action: Action) -> bool;

    // Health monitor

    fn perform_upkeep(env: Env, keeper: Address) -> Result<UpkeepReport, Error>;

    fn risk_score(env: Env, account: Address) -> AccountRisk;

    fn request_liquidation(env: Env, requester: Address, account: Address) -> Result<u64, Error>;

    fn on_random_fulfilled(env: Env, request_id: u64, value: u64) -> Result<(), Error>;

    fn execute_liquidation_request(
        env: Env,
        liquidator: Address,
        request_id: u64,
        collateral_asset: Address,
        debt_asset: Address,
        debt_amount: i128,
    ) -> Result<LiquidationResult, Error>;

    fn liquidation_request(env: Env, request_id: u64) -> Option<LiquidationRequest>;
}
