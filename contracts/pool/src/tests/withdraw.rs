use crate::tests::sut::{fill_pool, fill_pool_with_debt, init_pool, units, usd};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_withdraw_to_receiver() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let borrower = fill_pool(&env, &sut);
    let receiver = Address::generate(&env);
    let asset = sut.collateral.address();

    sut.pool.withdraw(&borrower, &asset, &units(4), &receiver);

    assert_eq!(sut.pool.position(&borrower, &asset).collateral, units(6));
    assert_eq!(sut.collateral.token.balance(&receiver), units(4));
    assert_eq!(sut.collateral.token.balance(&sut.pool.address), units(6));
    assert_eq!(
        sut.pool.account_position(&borrower).collateral_value,
        usd(18_000)
    );
}

#[test]
fn should_fail_when_not_enough_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let borrower = fill_pool(&env, &sut);

    assert_eq!(
        sut.pool
            .try_withdraw(&borrower, &sut.collateral.address(), &units(11), &borrower)
            .unwrap_err()
            .unwrap(),
        Error::NotEnoughCollateral
    );
}

#[test]
fn should_fail_when_health_factor_drops_below_one() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let (borrower, _) = fill_pool_with_debt(&env, &sut);
    let asset = sut.collateral.address();

    // 9 tokens weigh $21,600 against $22,000 of debt
    assert_eq!(
        sut.pool
            .try_withdraw(&borrower, &asset, &units(1), &borrower)
            .unwrap_err()
            .unwrap(),
        Error::HealthFactorTooLow
    );
    assert_eq!(sut.pool.position(&borrower, &asset).collateral, units(10));
}

#[test]
fn should_be_available_while_paused() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let borrower = fill_pool(&env, &sut);

    sut.pool.set_pause(&sut.pool_admin, &true);
    sut.pool
        .withdraw(&borrower, &sut.collateral.address(), &units(10), &borrower);

    assert_eq!(sut.collateral.token.balance(&borrower), units(10));
    assert_eq!(sut.pool.account_position(&borrower).collateral_value, 0);
}
