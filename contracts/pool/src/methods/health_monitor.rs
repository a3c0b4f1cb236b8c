use pool_interface::types::error::Error;
use pool_interface::types::liquidation_result::LiquidationResult;
use pool_interface::types::permission::Permission;
use pool_interface::types::upkeep_report::UpkeepReport;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::types::health_monitor;
use crate::types::non_reentrant::NonReentrant;

use super::utils::validation::require_permission;

pub fn perform_upkeep(env: &Env, keeper: &Address) -> Result<UpkeepReport, Error> {
    require_permission(env, keeper, &Permission::Keeper)?;

    let _guard = NonReentrant::enter(env)?;

    health_monitor::perform_upkeep(env, keeper)
}

pub fn request_liquidation(env: &Env, requester: &Address, account: &Address) -> Result<u64, Error> {
    require_permission(env, requester, &Permission::Liquidator)?;

    health_monitor::request_liquidation(env, requester, account)
}

pub fn on_random_fulfilled(env: &Env, request_id: u64, value: u64) -> Result<(), Error> {
    health_monitor::on_random_fulfilled(env, request_id, value)
}

pub fn execute_liquidation_request(
    env: &Env,
    liquidator: &Address,
    request_id: u64,
    collateral_asset: &Address,
    debt_asset: &Address,
    debt_amount: i128,
) -> Result<LiquidationResult, Error> {
    require_permission(env, liquidator, &Permission::Liquidator)?;

    let _guard = NonReentrant::enter(env)?;

    let result = health_monitor::execute_liquidation_request(
        env,
        liquidator,
        request_id,
        collateral_asset,
        debt_asset,
        debt_amount,
    )?;

    event::liquidation(env, liquidator, &result);

    Ok(result)
}
