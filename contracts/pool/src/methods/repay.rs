use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_asset_config;
use crate::types::non_reentrant::NonReentrant;
use crate::types::position_ledger::PositionLedger;
use crate::types::price_provider::PriceProvider;

use super::utils::user_action::require_user_action;
use super::utils::validation::require_positive_amount;

/// Repays own debt with the underlying asset. Only the recorded debt is taken.
pub fn repay(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<i128, Error> {
    who.require_auth();

    let _guard = NonReentrant::enter(env)?;

    require_positive_amount(amount)?;

    let config = read_asset_config(env, asset)?;

    require_user_action(env, who, Action::Repay)?;

    let mut prices = PriceProvider::new(env);
    let mut ledger = PositionLedger::new(env, who);
    let applied = ledger.record_repay(&mut prices, &config, amount);

    if applied > 0 {
        token::Client::new(env, asset).transfer(who, &env.current_contract_address(), &applied);
    }

    event::repay(env, who, asset, applied);

    Ok(applied)
}
