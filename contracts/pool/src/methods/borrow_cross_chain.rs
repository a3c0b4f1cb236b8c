use pool_interface::types::action::Action;
use pool_interface::types::cross_chain_message::MessageAction;
use pool_interface::types::error::Error;
use soroban_sdk::{Address, BytesN, Env};

use crate::event;
use crate::storage::read_asset_config;
use crate::types::cross_chain_messenger::CrossChainMessenger;
use crate::types::non_reentrant::NonReentrant;
use crate::types::position_ledger::PositionLedger;
use crate::types::price_provider::PriceProvider;

use super::utils::user_action::require_user_action;
use super::utils::validation::{
    require_borrowing_enabled, require_not_paused, require_positive_amount,
};

/// Fee the transport charges for the borrow message, nothing is written
pub fn quote_cross_chain_borrow(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    destination_chain: u64,
    receiver: &Address,
) -> Result<i128, Error> {
    require_positive_amount(amount)?;
    require_borrowing_enabled(&read_asset_config(env, asset)?)?;

    let messenger = CrossChainMessenger::new(env)?;
    let message = messenger.build(
        who,
        MessageAction::Borrow,
        asset,
        amount,
        destination_chain,
        receiver,
    )?;

    messenger.quote(&message)
}

/// Records the debt against local collateral and sends the message minting
/// the synthetic on `destination_chain`. The health factor is recomputed on
/// the tentative debt before the message leaves.
pub fn borrow_cross_chain(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    destination_chain: u64,
    receiver: &Address,
) -> Result<BytesN<32>, Error> {
    who.require_auth();

    let _guard = NonReentrant::enter(env)?;

    require_not_paused(env)?;
    require_positive_amount(amount)?;

    let config = read_asset_config(env, asset)?;
    require_borrowing_enabled(&config)?;

    let mut access = require_user_action(env, who, Action::Borrow)?;

    let messenger = CrossChainMessenger::new(env)?;
    let message = messenger.build(
        who,
        MessageAction::Borrow,
        asset,
        amount,
        destination_chain,
        receiver,
    )?;
    let fee = messenger.quote(&message)?;

    let mut prices = PriceProvider::new(env);
    let mut ledger = PositionLedger::new(env, who);
    let data = ledger.stage_borrow(&mut prices, &config, amount)?;

    access.require_borrow_cap(&data)?;

    let value = prices.to_value(asset, config.decimals, amount)?;
    access.consume_daily_limit(value)?;

    ledger.commit(&data);

    let message_id = messenger.send(who, &message, fee)?;

    event::borrow(env, who, asset, amount, data.health_factor, &message_id);

    Ok(message_id)
}
