use pool_interface::types::asset_config::AssetConfig;
use pool_interface::types::cross_chain_message::CrossChainMessage;
use pool_interface::types::liquidation_request::LiquidationRequest;
use pool_interface::types::liquidation_result::LiquidationResult;
use pool_interface::types::pool_config::PoolConfig;
use pool_interface::types::protocol_state::ProtocolState;
use pool_interface::types::upkeep_report::UpkeepReport;
use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, config: &PoolConfig) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(
        topics,
        (config.chain_id, config.transport.clone(), config.fee_token.clone()),
    );
}

pub(crate) fn asset_configured(e: &Env, config: &AssetConfig) {
    let topics = (Symbol::new(e, "asset_configured"), config.asset.clone());
    e.events().publish(
        topics,
        (
            config.ltv,
            config.liquidation_threshold,
            config.collateral_enabled,
            config.borrow_enabled,
        ),
    );
}

pub(crate) fn asset_activated(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "asset_activated"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn asset_deactivated(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "asset_deactivated"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn fallback_price(e: &Env, asset: &Address, price: i128) {
    let topics = (Symbol::new(e, "fallback_price"), asset.clone());
    e.events().publish(topics, price);
}

pub(crate) fn protocol_state(e: &Env, state: &ProtocolState) {
    let topics = (Symbol::new(e, "protocol_state"),);
    e.events().publish(
        topics,
        (state.paused, state.emergency_mode, state.security_score),
    );
}

pub(crate) fn deposit(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("deposit"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn withdraw(e: &Env, who: &Address, asset: &Address, to: &Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), who.clone());
    e.events().publish(topics, (to.clone(), asset.clone(), amount));
}

pub(crate) fn borrow(
    e: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    health_factor: i128,
    message_id: &BytesN<32>,
) {
    let topics = (symbol_short!("borrow"), who.clone());
    e.events()
        .publish(topics, (asset.clone(), amount, health_factor, message_id.clone()));
}

pub(crate) fn repay(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("repay"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn liquidation(e: &Env, liquidator: &Address, result: &LiquidationResult) {
    let topics = (Symbol::new(e, "liquidation"), result.account.clone());
    e.events().publish(
        topics,
        (
            liquidator.clone(),
            result.debt_asset.clone(),
            result.debt_covered,
            result.collateral_asset.clone(),
            result.collateral_seized,
            result.health_factor_after,
        ),
    );
}

pub(crate) fn liquidation_failed(e: &Env, liquidator: &Address, account: &Address, error: u32) {
    let topics = (Symbol::new(e, "liquidation_failed"), account.clone());
    e.events().publish(topics, (liquidator.clone(), error));
}

pub(crate) fn message_sent(e: &Env, message_id: &BytesN<32>, message: &CrossChainMessage, fee: i128) {
    let topics = (Symbol::new(e, "message_sent"), message.destination_chain);
    e.events().publish(
        topics,
        (
            message_id.clone(),
            message.account.clone(),
            message.action,
            message.amount,
            message.nonce,
            fee,
        ),
    );
}

pub(crate) fn message_received(e: &Env, message_id: &BytesN<32>, message: &CrossChainMessage) {
    let topics = (Symbol::new(e, "message_received"), message.source_chain);
    e.events().publish(
        topics,
        (
            message_id.clone(),
            message.account.clone(),
            message.action,
            message.amount,
        ),
    );
}

pub(crate) fn synthetic_mint(e: &Env, receiver: &Address, asset: &Address, amount: i128) {
    let topics = (Symbol::new(e, "synthetic_mint"), receiver.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn synthetic_burn(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (Symbol::new(e, "synthetic_burn"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn account_blocked(e: &Env, account: &Address, blocked_until: u64) {
    let topics = (Symbol::new(e, "account_blocked"), account.clone());
    e.events().publish(topics, blocked_until);
}

pub(crate) fn liquidation_requested(e: &Env, request: &LiquidationRequest) {
    let topics = (Symbol::new(e, "liquidation_requested"), request.account.clone());
    e.events().publish(
        topics,
        (
            request.id,
            request.requester.clone(),
            request.amount,
            request.emergency,
        ),
    );
}

pub(crate) fn liquidation_request_expired(e: &Env, request: &LiquidationRequest) {
    let topics = (
        Symbol::new(e, "liquidation_request_expired"),
        request.account.clone(),
    );
    e.events().publish(topics, request.id);
}

pub(crate) fn liquidator_assigned(e: &Env, request_id: u64, liquidator: &Address) {
    let topics = (Symbol::new(e, "liquidator_assigned"), liquidator.clone());
    e.events().publish(topics, request_id);
}

/// Notifies a requester that the request went to another liquidator
pub(crate) fn liquidation_reassigned(
    e: &Env,
    request_id: u64,
    requester: &Address,
    liquidator: &Address,
) {
    let topics = (Symbol::new(e, "liquidation_reassigned"), requester.clone());
    e.events().publish(topics, (request_id, liquidator.clone()));
}

pub(crate) fn upkeep(e: &Env, keeper: &Address, report: &UpkeepReport) {
    let topics = (symbol_short!("upkeep"), keeper.clone());
    e.events().publish(
        topics,
        (
            report.scanned,
            report.unhealthy,
            report.emergency_queued,
            report.emergency_skipped,
            report.security_score,
        ),
    );
}
