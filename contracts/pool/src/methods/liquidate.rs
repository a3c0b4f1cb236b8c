use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use pool_interface::types::liquidation_call::{LiquidationCall, LiquidationOutcome};
use pool_interface::types::liquidation_result::LiquidationResult;
use pool_interface::types::permission::Permission;
use soroban_sdk::{vec, Address, Env, Vec};

use crate::event;
use crate::types::liquidation_engine;
use crate::types::non_reentrant::NonReentrant;

use super::utils::user_action::require_user_action;
use super::utils::validation::require_permission;

pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    account: &Address,
    collateral_asset: &Address,
    debt_asset: &Address,
    debt_amount: i128,
) -> Result<LiquidationResult, Error> {
    require_permission(env, liquidator, &Permission::Liquidator)?;

    let _guard = NonReentrant::enter(env)?;

    require_user_action(env, liquidator, Action::Liquidate)?;

    let result = liquidation_engine::liquidate(
        env,
        liquidator,
        account,
        collateral_asset,
        debt_asset,
        debt_amount,
    )?;

    event::liquidation(env, liquidator, &result);

    Ok(result)
}

/// Executes every call independently. A failed call leaves no state behind,
/// is reported in its outcome and does not stop the batch.
pub fn batch_liquidate(
    env: &Env,
    liquidator: &Address,
    calls: &Vec<LiquidationCall>,
) -> Result<Vec<LiquidationOutcome>, Error> {
    require_permission(env, liquidator, &Permission::Liquidator)?;

    let _guard = NonReentrant::enter(env)?;

    require_user_action(env, liquidator, Action::Liquidate)?;

    let mut outcomes = vec![env];

    for call in calls.iter() {
        let outcome = match liquidation_engine::liquidate(
            env,
            liquidator,
            &call.account,
            &call.collateral_asset,
            &call.debt_asset,
            call.debt_amount,
        ) {
            Ok(result) => {
                event::liquidation(env, liquidator, &result);

                LiquidationOutcome {
                    account: call.account.clone(),
                    result: Some(result),
                    error: None,
                }
            }
            Err(error) => {
                event::liquidation_failed(env, liquidator, &call.account, error as u32);

                LiquidationOutcome {
                    account: call.account.clone(),
                    result: None,
                    error: Some(error as u32),
                }
            }
        };

        outcomes.push_back(outcome);
    }

    Ok(outcomes)
}
