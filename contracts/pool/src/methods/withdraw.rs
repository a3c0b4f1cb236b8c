use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_asset_config;
use crate::types::non_reentrant::NonReentrant;
use crate::types::position_ledger::PositionLedger;
use crate::types::price_provider::PriceProvider;

use super::utils::user_action::require_user_action;
use super::utils::validation::{require_active_asset, require_positive_amount};

/// Available while paused so positions can be de-risked
pub fn withdraw(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    to: &Address,
) -> Result<(), Error> {
    who.require_auth();

    let _guard = NonReentrant::enter(env)?;

    require_positive_amount(amount)?;

    let config = read_asset_config(env, asset)?;
    require_active_asset(&config)?;

    let mut access = require_user_action(env, who, Action::Withdraw)?;

    let mut prices = PriceProvider::new(env);
    let mut ledger = PositionLedger::new(env, who);
    let data = ledger.stage_withdraw(&mut prices, &config, amount)?;

    let value = prices.to_value(asset, config.decimals, amount)?;
    access.consume_daily_limit(value)?;

    ledger.commit(&data);

    token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &amount);

    event::withdraw(env, who, asset, to, amount);

    Ok(())
}
