use crate::tests::sut::{
    fill_pool, fill_pool_with_debt, init_pool, units, usd, HEARTBEAT, START,
};
use crate::*;
use soroban_sdk::testutils::Ledger;

#[test]
fn should_repay_partially() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let asset = sut.debt.address();

    sut.debt.token_admin.mint(&borrower, &units(2_000));

    assert_eq!(sut.pool.repay(&borrower, &asset, &units(2_000)), units(2_000));

    assert_eq!(sut.pool.position(&borrower, &asset).debt, units(20_000));
    assert_eq!(sut.pool.account_position(&borrower).debt_value, usd(20_000));
    assert_eq!(sut.debt.token.balance(&borrower), 0);
    assert_eq!(sut.debt.token.balance(&sut.pool.address), units(2_000));
}

#[test]
fn should_take_only_recorded_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let asset = sut.debt.address();

    sut.debt.token_admin.mint(&borrower, &units(30_000));

    assert_eq!(
        sut.pool.repay(&borrower, &asset, &units(30_000)),
        units(22_000)
    );

    let summary = sut.pool.account_position(&borrower);

    assert_eq!(sut.pool.position(&borrower, &asset).debt, 0);
    assert_eq!(summary.health_factor, i128::MAX);
    assert_eq!(sut.debt.token.balance(&borrower), units(8_000));
}

#[test]
fn should_repay_with_stale_prices() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let asset = sut.debt.address();

    sut.debt.token_admin.mint(&borrower, &units(2_000));
    env.ledger()
        .with_mut(|li| li.timestamp = START + 2 * HEARTBEAT);

    assert!(sut.pool.get_price(&asset).stale);
    assert_eq!(sut.pool.repay(&borrower, &asset, &units(2_000)), units(2_000));

    assert_eq!(sut.pool.position(&borrower, &asset).debt, units(20_000));
    assert_eq!(sut.pool.account_position(&borrower).debt_value, usd(22_000));
    assert_eq!(
        sut.pool.try_refresh(&borrower).unwrap_err().unwrap(),
        Error::StalePrice
    );
}

#[test]
fn should_ignore_repay_without_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let borrower = fill_pool(&env, &sut);

    assert_eq!(sut.pool.repay(&borrower, &sut.debt.address(), &units(1)), 0);
}

#[test]
fn should_be_available_while_paused() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let asset = sut.debt.address();

    sut.pool.set_pause(&sut.pool_admin, &true);
    sut.debt.token_admin.mint(&borrower, &units(1_000));
    sut.pool.repay(&borrower, &asset, &units(1_000));

    assert_eq!(sut.pool.position(&borrower, &asset).debt, units(21_000));
}
