use crate::tests::sut::{
    create_liquidator, drop_collateral_price, fill_pool, fill_pool_with_debt, init_pool, units,
    usd,
};
use crate::*;
use pool_interface::types::liquidation_call::LiquidationCall;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction};
use soroban_sdk::{vec, IntoVal, Symbol};

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);
    let collateral = sut.collateral.address();
    let debt = sut.debt.address();

    drop_collateral_price(&env, &sut, 2_500);
    sut.pool
        .liquidate(&liquidator, &borrower, &collateral, &debt, &units(1_000));

    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.pool.address.clone(),
            Symbol::new(&env, "liquidate"),
            (
                liquidator.clone(),
                borrower.clone(),
                collateral,
                debt,
                units(1_000)
            )
                .into_val(&env)
        )),
    );
}

#[test]
fn should_fail_when_liquidator_not_authorized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);

    drop_collateral_price(&env, &sut, 2_500);

    assert_eq!(
        sut.pool
            .try_liquidate(
                &Address::generate(&env),
                &borrower,
                &sut.collateral.address(),
                &sut.debt.address(),
                &units(1_000)
            )
            .unwrap_err()
            .unwrap(),
        Error::NotAuthorized
    );
}

#[test]
fn should_fail_when_position_healthy() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);

    assert!(!sut.pool.can_liquidate(&borrower));
    assert_eq!(
        sut.pool
            .try_liquidate(
                &liquidator,
                &borrower,
                &sut.collateral.address(),
                &sut.debt.address(),
                &units(1_000)
            )
            .unwrap_err()
            .unwrap(),
        Error::PositionHealthy
    );
}

#[test]
fn should_detect_unhealthy_position_after_price_drop() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);

    drop_collateral_price(&env, &sut, 2_500);

    assert_eq!(sut.pool.health_factor(&borrower), 909_090_909_090_909_090);
    assert!(sut.pool.can_liquidate(&borrower));

    // stored summary is stale until refreshed
    assert!(sut.pool.liquidation_opportunities().is_empty());

    sut.pool.refresh(&borrower);

    let opportunities = sut.pool.liquidation_opportunities();

    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities.get_unchecked(0).account, borrower);
    assert_eq!(
        opportunities.get_unchecked(0).health_factor,
        909_090_909_090_909_090
    );
    assert_eq!(opportunities.get_unchecked(0).debt_value, usd(22_000));
}

#[test]
fn should_list_opportunities_below_liquidation_threshold() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let debt = sut.debt.address();

    drop_collateral_price(&env, &sut, 2_650);
    sut.pool.refresh(&borrower);

    // 0.96 sits between the 0.95 threshold and 1.0
    let health_factor = sut.pool.account_position(&borrower).health_factor;

    assert_eq!(health_factor, 963_636_363_636_363_636);
    assert!(!sut.pool.can_liquidate(&borrower));
    assert!(sut.pool.liquidation_opportunities().is_empty());

    let mut config = sut.pool.liquidation_config(&debt);
    config.threshold = 9_800;
    sut.pool
        .set_liquidation_config(&sut.pool_admin, &debt, &config);

    let opportunities = sut.pool.liquidation_opportunities();

    assert!(sut.pool.can_liquidate(&borrower));
    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities.get_unchecked(0).health_factor, health_factor);
}

#[test]
fn should_quote_close_factor_bound() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);

    drop_collateral_price(&env, &sut, 2_500);

    let quote = sut.pool.calculate_liquidation(
        &borrower,
        &sut.collateral.address(),
        &sut.debt.address(),
    );

    assert_eq!(quote.health_factor, 909_090_909_090_909_090);
    assert_eq!(quote.max_liquidatable_debt, units(11_000));
    assert_eq!(quote.debt_to_cover, units(11_000));
    // $11,550 of collateral at $2,500
    assert_eq!(quote.collateral_to_seize, 46_200_000);
}

#[test]
fn should_liquidate_with_bonus() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);
    let collateral = sut.collateral.address();
    let debt = sut.debt.address();

    drop_collateral_price(&env, &sut, 2_500);

    let result = sut
        .pool
        .liquidate(&liquidator, &borrower, &collateral, &debt, &units(5_000));

    assert_eq!(result.debt_covered, units(5_000));
    assert_eq!(result.collateral_seized, 21_000_000);
    assert_eq!(result.health_factor_after, 929_411_764_705_882_352);

    assert_eq!(sut.pool.position(&borrower, &debt).debt, units(17_000));
    assert_eq!(
        sut.pool.position(&borrower, &collateral).collateral,
        79_000_000
    );
    assert_eq!(sut.collateral.token.balance(&liquidator), 21_000_000);
    assert_eq!(sut.debt.token.balance(&liquidator), units(95_000));
    assert_eq!(sut.debt.token.balance(&sut.pool.address), units(5_000));
    assert_eq!(sut.pool.risk_score(&borrower).liquidation_count, 1);
}

#[test]
fn should_fail_when_close_factor_exceeded() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);

    drop_collateral_price(&env, &sut, 2_500);

    assert_eq!(
        sut.pool
            .try_liquidate(
                &liquidator,
                &borrower,
                &sut.collateral.address(),
                &sut.debt.address(),
                &(units(11_000) + 1)
            )
            .unwrap_err()
            .unwrap(),
        Error::ExceedsCloseFactor
    );
}

#[test]
fn should_clamp_seizure_to_available_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);
    let collateral = sut.collateral.address();
    let debt = sut.debt.address();

    // $1,000 of collateral left against $22,000 of debt
    drop_collateral_price(&env, &sut, 100);

    let quote = sut.pool.calculate_liquidation(&borrower, &collateral, &debt);

    assert_eq!(quote.collateral_to_seize, units(10));
    assert_eq!(quote.debt_to_cover, 9_523_809_523);

    let result = sut
        .pool
        .liquidate(&liquidator, &borrower, &collateral, &debt, &units(11_000));

    assert_eq!(result.collateral_seized, units(10));
    assert_eq!(result.debt_covered, 9_523_809_523);
    assert_eq!(result.health_factor_after, 0);
    assert_eq!(sut.pool.position(&borrower, &collateral).collateral, 0);
    assert_eq!(
        sut.pool.position(&borrower, &debt).debt,
        units(22_000) - 9_523_809_523
    );
}

#[test]
fn should_fail_when_liquidation_inactive() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);
    let debt = sut.debt.address();

    let mut config = sut.pool.liquidation_config(&debt);
    config.active = false;
    sut.pool
        .set_liquidation_config(&sut.pool_admin, &debt, &config);

    drop_collateral_price(&env, &sut, 2_500);

    assert!(!sut.pool.can_liquidate(&borrower));
    assert_eq!(
        sut.pool
            .try_liquidate(
                &liquidator,
                &borrower,
                &sut.collateral.address(),
                &debt,
                &units(1_000)
            )
            .unwrap_err()
            .unwrap(),
        Error::LiquidationNotActive
    );
}

#[test]
fn should_report_batch_failures_per_item() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let healthy = fill_pool(&env, &sut);
    let liquidator = create_liquidator(&env, &sut);
    let collateral = sut.collateral.address();
    let debt = sut.debt.address();

    drop_collateral_price(&env, &sut, 2_500);

    let outcomes = sut.pool.batch_liquidate(
        &liquidator,
        &vec![
            &env,
            LiquidationCall {
                account: healthy.clone(),
                collateral_asset: collateral.clone(),
                debt_asset: debt.clone(),
                debt_amount: units(1_000),
            },
            LiquidationCall {
                account: borrower.clone(),
                collateral_asset: collateral.clone(),
                debt_asset: debt.clone(),
                debt_amount: units(5_000),
            },
            LiquidationCall {
                account: borrower.clone(),
                collateral_asset: collateral.clone(),
                debt_asset: debt.clone(),
                debt_amount: units(20_000),
            },
        ],
    );

    assert_eq!(outcomes.len(), 3);

    let first = outcomes.get_unchecked(0);
    assert_eq!(first.account, healthy);
    assert_eq!(first.result, None);
    assert_eq!(first.error, Some(Error::PositionHealthy as u32));

    let second = outcomes.get_unchecked(1);
    assert_eq!(second.error, None);
    assert_eq!(second.result.unwrap().collateral_seized, 21_000_000);

    let third = outcomes.get_unchecked(2);
    assert_eq!(third.error, Some(Error::ExceedsCloseFactor as u32));

    assert_eq!(sut.pool.position(&borrower, &debt).debt, units(17_000));
    assert_eq!(sut.collateral.token.balance(&liquidator), 21_000_000);
}
