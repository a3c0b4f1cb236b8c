use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::read_asset_config;
use crate::types::non_reentrant::NonReentrant;
use crate::types::position_ledger::PositionLedger;
use crate::types::price_provider::PriceProvider;

use super::utils::user_action::require_user_action;
use super::utils::validation::{
    require_collateral_enabled, require_not_paused, require_positive_amount,
};

pub fn deposit(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    let _guard = NonReentrant::enter(env)?;

    require_not_paused(env)?;
    require_positive_amount(amount)?;

    let config = read_asset_config(env, asset)?;
    require_collateral_enabled(&config)?;

    let access = require_user_action(env, who, Action::Deposit)?;

    let mut prices = PriceProvider::new(env);
    let mut ledger = PositionLedger::new(env, who);
    let data = ledger.stage_deposit(&mut prices, &config, amount)?;

    access.require_deposit_cap(&data)?;

    token::Client::new(env, asset).transfer(who, &env.current_contract_address(), &amount);

    ledger.commit(&data);

    event::deposit(env, who, asset, amount);

    Ok(())
}
