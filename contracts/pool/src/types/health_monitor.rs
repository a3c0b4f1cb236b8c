use common::{bps_mul, FixedI128, ONE_HOUR};
use pool_interface::types::error::Error;
use pool_interface::types::liquidation_config::DEFAULT_CLOSE_FACTOR;
use pool_interface::types::liquidation_request::LiquidationRequest;
use pool_interface::types::liquidation_result::LiquidationResult;
use pool_interface::types::permission::Permission;
use pool_interface::types::pool_config::PoolConfig;
use pool_interface::types::upkeep_report::UpkeepReport;
use randomness_interface::RandomnessClient;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    next_liquidation_request_id, read_account_risk, read_accounts, read_config,
    read_emergency_window, read_liquidation_request, read_open_emergency_request,
    read_permission_owners, read_protocol_state, read_randomness_request, read_user_config,
    remove_randomness_request, write_account_risk, write_emergency_window,
    write_liquidation_request, write_open_emergency_request, write_protocol_state,
    write_randomness_request, EmergencyWindow,
};

use super::liquidation_engine::{self, is_liquidatable};
use super::position_ledger::PositionLedger;
use super::price_provider::PriceProvider;

const MAX_RISK_SCORE: u32 = 100;
const MAX_SECURITY_SCORE: u32 = 100;

/// Risk of the health factor band, 18 decimals
pub fn band_risk(health_factor: i128) -> u32 {
    let one = FixedI128::DENOMINATOR;

    if health_factor >= 2 * one {
        0
    } else if health_factor >= one + one / 2 {
        20
    } else if health_factor >= one + one / 5 {
        50
    } else if health_factor >= one {
        80
    } else {
        100
    }
}

/// Band risk plus liquidation history (10 per liquidation, at most 30)
/// plus 10 for inactive accounts, capped at 100
pub fn risk_score(health_factor: i128, liquidation_count: u32, inactive: bool) -> u32 {
    let history = liquidation_count.saturating_mul(10).min(30);
    let inactivity = if inactive { 10 } else { 0 };

    (band_risk(health_factor) + history + inactivity).min(MAX_RISK_SCORE)
}

/// 100 minus penalties for the unhealthy share of scanned accounts (up to 40),
/// the average risk (up to 30) and emergencies of the last hour (up to 30)
pub fn security_score(scanned: u32, unhealthy: u32, total_risk: u32, emergencies: u32) -> u32 {
    let (unhealthy_penalty, risk_penalty) = if scanned == 0 {
        (0, 0)
    } else {
        let unhealthy_ratio = unhealthy.saturating_mul(100) / scanned;
        let average_risk = total_risk / scanned;

        (unhealthy_ratio * 40 / 100, average_risk * 30 / 100)
    };

    let emergency_penalty = emergencies.saturating_mul(10).min(30);

    MAX_SECURITY_SCORE
        .saturating_sub(unhealthy_penalty)
        .saturating_sub(risk_penalty)
        .saturating_sub(emergency_penalty)
}

pub fn perform_upkeep(env: &Env, keeper: &Address) -> Result<UpkeepReport, Error> {
    let config = read_config(env)?;
    let now = env.ledger().timestamp();

    let mut report = UpkeepReport::default();
    let mut total_risk = 0u32;
    let mut prices = PriceProvider::new(env);
    let mut window = current_window(env, now);

    for account in read_accounts(env).iter() {
        if !read_user_config(env, &account).has_any_debt() {
            expire_emergency(env, &account)?;
            continue;
        }

        report.scanned += 1;

        let mut risk = read_account_risk(env, &account);
        let inactive = config.inactivity_period > 0
            && now.saturating_sub(risk.last_activity) >= config.inactivity_period;

        let mut ledger = PositionLedger::new(env, &account);

        match ledger.refresh(&mut prices) {
            Ok(data) => {
                risk.risk_score = risk_score(data.health_factor, risk.liquidation_count, inactive);

                if !data.is_healthy() {
                    report.unhealthy += 1;
                }

                if data.health_factor >= config.critical_health_factor {
                    expire_emergency(env, &account)?;
                } else {
                    queue_emergency(
                        env,
                        &config,
                        keeper,
                        &account,
                        data.debt_value,
                        &mut window,
                        &mut report,
                    )?;
                }
            }
            Err(_) => {
                report.unpriced += 1;
                report.unhealthy += 1;
                risk.risk_score = MAX_RISK_SCORE;
            }
        }

        risk.last_scan = now;
        total_risk += risk.risk_score;
        write_account_risk(env, &account, &risk);
    }

    write_emergency_window(env, &window);

    report.security_score =
        security_score(report.scanned, report.unhealthy, total_risk, window.count);

    let mut state = read_protocol_state(env);
    state.security_score = report.security_score;

    if report.security_score < config.security_pause_threshold {
        state.paused = true;
        state.emergency_mode = true;
    }

    report.paused = state.paused;

    write_protocol_state(env, &state);

    event::protocol_state(env, &read_protocol_state(env));
    event::upkeep(env, keeper, &report);

    Ok(report)
}

/// Opens a liquidation request for an unhealthy account. With a randomness
/// source and more than one authorized liquidator, the liquidator is picked
/// when the randomness arrives; otherwise the requester is assigned.
pub fn request_liquidation(env: &Env, requester: &Address, account: &Address) -> Result<u64, Error> {
    let config = read_config(env)?;

    let mut prices = PriceProvider::new(env);
    let ledger = PositionLedger::new(env, account);
    let data = ledger.evaluate(&mut prices)?;

    if !is_liquidatable(env, &ledger, &data)? {
        return Err(Error::PositionHealthy);
    }

    let liquidators = read_permission_owners(env, &Permission::Liquidator);
    let id = next_liquidation_request_id(env);

    let mut request = LiquidationRequest {
        id,
        account: account.clone(),
        requester: requester.clone(),
        liquidator: None,
        amount: bps_mul(data.debt_value, DEFAULT_CLOSE_FACTOR).ok_or(Error::MathOverflowError)?,
        created_at: env.ledger().timestamp(),
        executed: false,
        expired: false,
        emergency: false,
        awaiting_randomness: false,
    };

    match config.randomness {
        Some(randomness) if liquidators.len() > 1 => {
            let randomness_id = RandomnessClient::new(env, &randomness)
                .request_random(&env.current_contract_address());

            write_randomness_request(env, randomness_id, id);
            request.awaiting_randomness = true;
        }
        _ => {
            request.liquidator = Some(requester.clone());
        }
    }

    write_liquidation_request(env, &request);

    event::liquidation_requested(env, &request);

    if let Some(liquidator) = &request.liquidator {
        event::liquidator_assigned(env, id, liquidator);
    }

    Ok(id)
}

/// Assigns `pool[value % len]` of the authorized liquidators to the request
/// waiting for `randomness_id`
pub fn on_random_fulfilled(env: &Env, randomness_id: u64, value: u64) -> Result<(), Error> {
    let config = read_config(env)?;

    config
        .randomness
        .ok_or(Error::RandomnessNotConfigured)?
        .require_auth();

    let request_id =
        read_randomness_request(env, randomness_id).ok_or(Error::UnknownLiquidationRequest)?;
    let mut request = read_liquidation_request(env, request_id)?;

    let liquidators = read_permission_owners(env, &Permission::Liquidator);
    let chosen = if liquidators.is_empty() {
        request.requester.clone()
    } else {
        let index = (value % liquidators.len() as u64) as u32;

        liquidators
            .get(index)
            .unwrap_or_else(|| request.requester.clone())
    };

    request.liquidator = Some(chosen.clone());
    request.awaiting_randomness = false;

    write_liquidation_request(env, &request);
    remove_randomness_request(env, randomness_id);

    event::liquidator_assigned(env, request_id, &chosen);

    if chosen != request.requester {
        event::liquidation_reassigned(env, request_id, &request.requester, &chosen);
    }

    Ok(())
}

/// Runs the liquidation of a request once. Emergency requests are open to
/// any authorized liquidator.
pub fn execute_liquidation_request(
    env: &Env,
    liquidator: &Address,
    request_id: u64,
    collateral_asset: &Address,
    debt_asset: &Address,
    debt_amount: i128,
) -> Result<LiquidationResult, Error> {
    let mut request = read_liquidation_request(env, request_id)?;

    if request.executed {
        return Err(Error::LiquidationRequestExecuted);
    }

    if request.expired {
        return Err(Error::LiquidationRequestExpired);
    }

    if request.awaiting_randomness {
        return Err(Error::AwaitingRandomness);
    }

    let assigned = request.liquidator.as_ref() == Some(liquidator);

    if !request.emergency && !assigned {
        return Err(Error::NotAssignedLiquidator);
    }

    let result = liquidation_engine::liquidate(
        env,
        liquidator,
        &request.account,
        collateral_asset,
        debt_asset,
        debt_amount,
    )?;

    request.executed = true;
    write_liquidation_request(env, &request);

    if request.emergency {
        write_open_emergency_request(env, &request.account, None);
    }

    Ok(result)
}

fn current_window(env: &Env, now: u64) -> EmergencyWindow {
    let window = read_emergency_window(env);

    if now >= window.started_at.saturating_add(ONE_HOUR) {
        EmergencyWindow {
            started_at: now,
            count: 0,
        }
    } else {
        window
    }
}

/// Closes the open emergency request of an account back above the critical health factor
fn expire_emergency(env: &Env, account: &Address) -> Result<(), Error> {
    let Some(request_id) = read_open_emergency_request(env, account) else {
        return Ok(());
    };

    let mut request = read_liquidation_request(env, request_id)?;
    request.expired = true;

    write_liquidation_request(env, &request);
    write_open_emergency_request(env, account, None);

    event::liquidation_request_expired(env, &request);

    Ok(())
}

fn queue_emergency(
    env: &Env,
    config: &PoolConfig,
    keeper: &Address,
    account: &Address,
    debt_value: i128,
    window: &mut EmergencyWindow,
    report: &mut UpkeepReport,
) -> Result<(), Error> {
    if read_open_emergency_request(env, account).is_some() {
        return Ok(());
    }

    if window.count >= config.max_emergency_per_hour {
        report.emergency_skipped += 1;
        return Ok(());
    }

    let request = LiquidationRequest {
        id: next_liquidation_request_id(env),
        account: account.clone(),
        requester: keeper.clone(),
        liquidator: None,
        amount: bps_mul(debt_value, DEFAULT_CLOSE_FACTOR).ok_or(Error::MathOverflowError)?,
        created_at: env.ledger().timestamp(),
        executed: false,
        expired: false,
        emergency: true,
        awaiting_randomness: false,
    };

    write_liquidation_request(env, &request);
    write_open_emergency_request(env, account, Some(request.id));

    window.count += 1;
    report.emergency_queued += 1;

    event::liquidation_requested(env, &request);

    Ok(())
}
