use crate::tests::sut::{create_token_contract, init_pool, TOKEN_DECIMALS};
use crate::*;
use pool_interface::types::asset_config_input::AssetConfigInput;
use soroban_sdk::testutils::Address as _;

fn asset_input(asset: &Address) -> AssetConfigInput {
    AssetConfigInput {
        asset: asset.clone(),
        synthetic: None,
        decimals: TOKEN_DECIMALS,
        ltv: 6_000,
        liquidation_threshold: 7_000,
        collateral_enabled: true,
        borrow_enabled: true,
    }
}

#[test]
fn should_list_assets_in_order() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let token = create_token_contract(&env, &sut.pool_admin);

    sut.pool
        .set_asset(&sut.pool_admin, &asset_input(&token.address()));

    let assets = sut.pool.assets();

    assert_eq!(assets.len(), 3);
    assert_eq!(assets.get_unchecked(0).asset, sut.collateral.address());
    assert_eq!(assets.get_unchecked(1).asset, sut.debt.address());

    let config = sut.pool.asset_config(&token.address());

    assert_eq!(config.index, 2);
    assert_eq!(config.ltv, 6_000);
    assert_eq!(config.liquidation_threshold, 7_000);
    assert!(config.active);
}

#[test]
fn should_keep_index_and_status_on_update() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    sut.pool.set_asset_status(&sut.pool_admin, &asset, &false);
    sut.pool.set_asset(
        &sut.pool_admin,
        &AssetConfigInput {
            ltv: 5_000,
            borrow_enabled: false,
            ..asset_input(&asset)
        },
    );

    let config = sut.pool.asset_config(&asset);

    assert_eq!(config.index, 0);
    assert_eq!(config.ltv, 5_000);
    assert!(!config.active);
    assert_eq!(sut.pool.assets().len(), 2);
}

#[test]
fn should_toggle_asset_status() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.debt.address();

    sut.pool.set_asset_status(&sut.pool_admin, &asset, &false);
    assert!(!sut.pool.asset_config(&asset).active);

    sut.pool.set_asset_status(&sut.pool_admin, &asset, &true);
    assert!(sut.pool.asset_config(&asset).active);
}

#[test]
fn should_fail_for_unknown_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let unknown = Address::generate(&env);

    assert_eq!(
        sut.pool.try_asset_config(&unknown).unwrap_err().unwrap(),
        Error::AssetNotSupported
    );
    assert_eq!(
        sut.pool
            .try_set_asset_status(&sut.pool_admin, &unknown, &true)
            .unwrap_err()
            .unwrap(),
        Error::AssetNotSupported
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #403)")]
fn should_reject_ltv_above_threshold() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.set_asset(
        &sut.pool_admin,
        &AssetConfigInput {
            ltv: 8_000,
            liquidation_threshold: 7_000,
            ..asset_input(&Address::generate(&env))
        },
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #401)")]
fn should_reject_threshold_above_percentage_factor() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.set_asset(
        &sut.pool_admin,
        &AssetConfigInput {
            liquidation_threshold: 10_001,
            ..asset_input(&Address::generate(&env))
        },
    );
}

#[test]
fn should_require_manage_assets_permission() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    assert_eq!(
        sut.pool
            .try_set_asset(&stranger, &asset_input(&stranger))
            .unwrap_err()
            .unwrap(),
        Error::NotAuthorized
    );
    assert_eq!(
        sut.pool
            .try_set_asset_status(&stranger, &sut.debt.address(), &false)
            .unwrap_err()
            .unwrap(),
        Error::NotAuthorized
    );
}
