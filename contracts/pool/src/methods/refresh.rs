use pool_interface::types::account_position::AccountPosition;
use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::position_ledger::PositionLedger;
use crate::types::price_provider::PriceProvider;

pub fn refresh(env: &Env, account: &Address) -> Result<AccountPosition, Error> {
    let mut prices = PriceProvider::new(env);
    let data = PositionLedger::new(env, account).refresh(&mut prices)?;

    Ok(data.to_position(env.ledger().timestamp()))
}

/// Always valued with fresh prices
pub fn health_factor(env: &Env, account: &Address) -> Result<i128, Error> {
    let mut prices = PriceProvider::new(env);
    let data = PositionLedger::new(env, account).evaluate(&mut prices)?;

    Ok(data.health_factor)
}
