use common::{bps_div, bps_mul, FixedI128, PERCENTAGE_FACTOR};
use pool_interface::types::asset_config::AssetConfig;
use pool_interface::types::error::Error;
use pool_interface::types::liquidation_opportunity::LiquidationOpportunity;
use pool_interface::types::liquidation_quote::LiquidationQuote;
use pool_interface::types::liquidation_result::LiquidationResult;
use soroban_sdk::{token, vec, Address, Env, Vec};

use crate::storage::{
    read_account_position, read_account_risk, read_accounts, read_asset_config, read_assets,
    read_liquidation_config, write_account_risk,
};

use super::account_data::AccountData;
use super::position_ledger::PositionLedger;
use super::price_provider::PriceProvider;

/// Highest active liquidation threshold over the debt assets of the account
/// as an 18 decimal health factor. `None` when no debt asset allows liquidation.
pub fn liquidation_threshold(env: &Env, ledger: &PositionLedger) -> Result<Option<i128>, Error> {
    let mut threshold: Option<u32> = None;

    for asset in read_assets(env).iter() {
        if ledger.position(&asset).debt == 0 {
            continue;
        }

        let config = read_liquidation_config(env, &asset);

        if config.active {
            threshold = Some(threshold.map_or(config.threshold, |t| t.max(config.threshold)));
        }
    }

    match threshold {
        Some(threshold) => Ok(Some(
            FixedI128::from_percentage(threshold)
                .ok_or(Error::MathOverflowError)?
                .into_inner(),
        )),
        None => Ok(None),
    }
}

/// `0 < health factor < liquidation threshold`
pub fn is_liquidatable(env: &Env, ledger: &PositionLedger, data: &AccountData) -> Result<bool, Error> {
    if !data.has_debt() || data.health_factor <= 0 {
        return Ok(false);
    }

    Ok(liquidation_threshold(env, ledger)?
        .map(|threshold| data.health_factor < threshold)
        .unwrap_or(false))
}

pub fn can_liquidate(env: &Env, account: &Address) -> Result<bool, Error> {
    let mut prices = PriceProvider::new(env);
    let ledger = PositionLedger::new(env, account);
    let data = ledger.evaluate(&mut prices)?;

    is_liquidatable(env, &ledger, &data)
}

/// Largest liquidation a single call may perform on the pair
pub fn calculate_liquidation(
    env: &Env,
    account: &Address,
    collateral_asset: &Address,
    debt_asset: &Address,
) -> Result<LiquidationQuote, Error> {
    let collateral_config = read_asset_config(env, collateral_asset)?;
    let debt_config = read_asset_config(env, debt_asset)?;
    let config = read_liquidation_config(env, debt_asset);

    let mut prices = PriceProvider::new(env);
    let ledger = PositionLedger::new(env, account);
    let data = ledger.evaluate(&mut prices)?;

    let debt = ledger.position(debt_asset).debt;
    let available = ledger.position(collateral_asset).collateral;
    let max_liquidatable_debt = bps_mul(debt, config.close_factor).ok_or(Error::MathOverflowError)?;

    let (debt_to_cover, collateral_to_seize) = seizure(
        &mut prices,
        &collateral_config,
        &debt_config,
        config.bonus,
        available,
        max_liquidatable_debt,
    )?;

    Ok(LiquidationQuote {
        health_factor: data.health_factor,
        max_liquidatable_debt,
        debt_to_cover,
        collateral_to_seize,
    })
}

/// Repays `debt_amount` of the account debt with the liquidator funds and
/// hands the seized collateral to the liquidator.
///
/// Balances are written only after both transfers succeeded, so a failed
/// call leaves no trace even when its error is caught by a batch.
pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    account: &Address,
    collateral_asset: &Address,
    debt_asset: &Address,
    debt_amount: i128,
) -> Result<LiquidationResult, Error> {
    if debt_amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let collateral_config = read_asset_config(env, collateral_asset)?;
    let debt_config = read_asset_config(env, debt_asset)?;
    let config = read_liquidation_config(env, debt_asset);

    if !config.active {
        return Err(Error::LiquidationNotActive);
    }

    let mut prices = PriceProvider::new(env);
    let mut ledger = PositionLedger::new(env, account);
    let data = ledger.evaluate(&mut prices)?;

    if !is_liquidatable(env, &ledger, &data)? {
        return Err(Error::PositionHealthy);
    }

    let debt = ledger.position(debt_asset).debt;

    if debt == 0 {
        return Err(Error::NoDebtToLiquidate);
    }

    let max_liquidatable_debt = bps_mul(debt, config.close_factor).ok_or(Error::MathOverflowError)?;

    if debt_amount > max_liquidatable_debt {
        return Err(Error::ExceedsCloseFactor);
    }

    let available = ledger.position(collateral_asset).collateral;

    if available == 0 {
        return Err(Error::NotEnoughCollateral);
    }

    let (debt_covered, collateral_seized) = seizure(
        &mut prices,
        &collateral_config,
        &debt_config,
        config.bonus,
        available,
        debt_amount,
    )?;

    if debt_covered == 0 || collateral_seized == 0 {
        return Err(Error::InvalidAmount);
    }

    ledger.stage_liquidation(
        &collateral_config,
        collateral_seized,
        &debt_config,
        debt_covered,
    )?;
    let data_after = ledger.evaluate(&mut prices)?;

    let pool = env.current_contract_address();
    let debt_token = token::Client::new(env, debt_asset);
    let collateral_token = token::Client::new(env, collateral_asset);

    if !matches!(
        debt_token.try_transfer(liquidator, &pool, &debt_covered),
        Ok(Ok(_))
    ) {
        return Err(Error::TransferFailed);
    }

    if !matches!(
        collateral_token.try_transfer(&pool, liquidator, &collateral_seized),
        Ok(Ok(_))
    ) {
        debt_token.transfer(&pool, liquidator, &debt_covered);
        return Err(Error::TransferFailed);
    }

    ledger.commit(&data_after);

    let mut risk = read_account_risk(env, account);
    risk.liquidation_count += 1;
    write_account_risk(env, account, &risk);

    Ok(LiquidationResult {
        account: account.clone(),
        collateral_asset: collateral_asset.clone(),
        debt_asset: debt_asset.clone(),
        debt_covered,
        collateral_seized,
        health_factor_after: data_after.health_factor,
    })
}

/// Accounts with debt whose stored health factor is below 1
/// Accounts whose stored summary sits below their liquidation threshold
pub fn liquidation_opportunities(env: &Env) -> Result<Vec<LiquidationOpportunity>, Error> {
    let mut opportunities = vec![env];

    for account in read_accounts(env).iter() {
        let position = match read_account_position(env, &account) {
            Some(position) if position.debt_value > 0 && position.health_factor > 0 => position,
            _ => continue,
        };

        let ledger = PositionLedger::new(env, &account);
        let below = liquidation_threshold(env, &ledger)?
            .map(|threshold| position.health_factor < threshold)
            .unwrap_or(false);

        if below {
            opportunities.push_back(LiquidationOpportunity {
                account,
                health_factor: position.health_factor,
                debt_value: position.debt_value,
            });
        }
    }

    Ok(opportunities)
}

/// Returns `(debt covered, collateral seized)` for repaying `debt_amount`.
///
/// The collateral owed is `debt value × (1 + bonus)`. When it exceeds the
/// available balance the seizure is clamped first and the covered debt is
/// then recomputed from the clamped collateral.
fn seizure(
    prices: &mut PriceProvider,
    collateral_config: &AssetConfig,
    debt_config: &AssetConfig,
    bonus: u32,
    available: i128,
    debt_amount: i128,
) -> Result<(i128, i128), Error> {
    if debt_amount == 0 || available == 0 {
        return Ok((0, 0));
    }

    let with_bonus = PERCENTAGE_FACTOR + bonus;

    let debt_value = prices.to_value(&debt_config.asset, debt_config.decimals, debt_amount)?;
    let seize_value = bps_mul(debt_value, with_bonus).ok_or(Error::MathOverflowError)?;
    let seize = prices.from_value(
        &collateral_config.asset,
        collateral_config.decimals,
        seize_value,
    )?;

    if seize <= available {
        return Ok((debt_amount, seize));
    }

    let available_value =
        prices.to_value(&collateral_config.asset, collateral_config.decimals, available)?;
    let covered_value = bps_div(available_value, with_bonus).ok_or(Error::MathOverflowError)?;
    let covered = prices
        .from_value(&debt_config.asset, debt_config.decimals, covered_value)?
        .min(debt_amount);

    Ok((covered, available))
}
