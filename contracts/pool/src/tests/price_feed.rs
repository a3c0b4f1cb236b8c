use crate::tests::sut::{
    init_pool, set_feed_price, units, usd, Sut, DAY, FEED_DECIMALS, HEARTBEAT, START,
};
use crate::*;
use pool_interface::types::asset_price::PriceSource;
use pool_interface::types::oracle_asset::OracleAsset;
use pool_interface::types::timestamp_precision::TimestampPrecision;
use price_feed_interface::types::asset::Asset;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, String};

fn set_collateral_feed(env: &Env, sut: &Sut, feed_decimals: u32, heartbeat: u64) {
    let asset = sut.collateral.address();

    sut.pool.set_price_feeds(
        &sut.pool_admin,
        &vec![
            env,
            PriceFeedConfigInput {
                asset: asset.clone(),
                feed: sut.price_feed.address.clone(),
                feed_asset: OracleAsset::Stellar(asset),
                feed_decimals,
                timestamp_precision: TimestampPrecision::Seconds,
                heartbeat,
                active: true,
                description: String::from_str(env, "ETH / USD"),
            },
        ],
    );
}

#[test]
fn should_normalize_feed_price() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let price = sut.pool.get_price(&sut.collateral.address());

    assert_eq!(price.price, usd(3_000));
    assert_eq!(price.updated_at, START);
    assert_eq!(price.source, PriceSource::Feed);
    assert!(!price.stale);
}

#[test]
fn should_flag_price_older_than_heartbeat() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();
    let user = Address::generate(&env);

    env.ledger()
        .with_mut(|li| li.timestamp = START + HEARTBEAT + 1);

    let price = sut.pool.get_price(&asset);

    assert!(price.stale);
    assert_eq!(price.source, PriceSource::Feed);
    assert_eq!(price.price, usd(3_000));

    sut.collateral.token_admin.mint(&user, &units(1));

    assert_eq!(
        sut.pool
            .try_deposit(&user, &asset, &units(1))
            .unwrap_err()
            .unwrap(),
        Error::StalePrice
    );
}

#[test]
fn should_use_fallback_when_feed_stale() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    env.ledger()
        .with_mut(|li| li.timestamp = START + HEARTBEAT + 1);

    sut.pool
        .set_fallback_price(&sut.pool_admin, &asset, &usd(2_900));

    let price = sut.pool.get_price(&asset);

    assert!(!price.stale);
    assert_eq!(price.source, PriceSource::Fallback);
    assert_eq!(price.price, usd(2_900));
    assert_eq!(price.updated_at, START + HEARTBEAT + 1);
}

#[test]
fn should_prefer_fresh_feed_over_fallback() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    sut.pool
        .set_fallback_price(&sut.pool_admin, &asset, &usd(2_900));

    let price = sut.pool.get_price(&asset);

    assert_eq!(price.source, PriceSource::Feed);
    assert_eq!(price.price, usd(3_000));
}

#[test]
fn should_ignore_expired_fallback() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    sut.pool
        .set_fallback_price(&sut.pool_admin, &asset, &usd(2_900));

    env.ledger().with_mut(|li| li.timestamp = START + DAY);

    let price = sut.pool.get_price(&asset);

    assert!(price.stale);
    assert_eq!(price.source, PriceSource::Feed);
}

#[test]
fn should_accept_fallback_younger_than_one_day() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    sut.pool
        .set_fallback_price(&sut.pool_admin, &asset, &usd(2_900));

    env.ledger().with_mut(|li| li.timestamp = START + DAY - 1);

    let price = sut.pool.get_price(&asset);

    assert!(!price.stale);
    assert_eq!(price.source, PriceSource::Fallback);
    assert_eq!(price.updated_at, START);

    env.ledger().with_mut(|li| li.timestamp = START + DAY);

    assert_eq!(sut.pool.get_price(&asset).source, PriceSource::Feed);
}

#[test]
fn should_cap_heartbeat_at_one_day() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    set_collateral_feed(&env, &sut, FEED_DECIMALS, 2 * DAY);

    env.ledger().with_mut(|li| li.timestamp = START + DAY);

    assert!(!sut.pool.get_price(&asset).stale);

    env.ledger().with_mut(|li| li.timestamp = START + DAY + 1);

    let price = sut.pool.get_price(&asset);

    assert!(price.stale);
    assert_eq!(price.source, PriceSource::Feed);
    assert_eq!(price.price, usd(3_000));
}

#[test]
fn should_scale_down_feed_with_more_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    set_collateral_feed(&env, &sut, 20, HEARTBEAT);
    // digits past 18 decimals are dropped
    sut.price_feed.set_price(
        &Asset::Stellar(asset.clone()),
        &(3_000 * 10_i128.pow(20) + 99),
        &START,
    );

    let price = sut.pool.get_price(&asset);

    assert!(!price.stale);
    assert_eq!(price.source, PriceSource::Feed);
    assert_eq!(price.price, usd(3_000));
}

#[test]
fn should_use_fallback_when_feed_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let collateral = sut.collateral.address();
    let debt = sut.debt.address();

    sut.price_feed.set_unavailable(&true);
    sut.pool
        .set_fallback_price(&sut.pool_admin, &collateral, &usd(3_100));

    let prices = sut.pool.get_prices(&vec![
        &env,
        collateral.clone(),
        debt.clone(),
        Address::generate(&env),
    ]);

    assert_eq!(prices.len(), 3);
    assert_eq!(prices.get_unchecked(0).source, PriceSource::Fallback);
    assert_eq!(prices.get_unchecked(0).price, usd(3_100));
    assert_eq!(prices.get_unchecked(1).source, PriceSource::Unavailable);
    assert!(!prices.get_unchecked(1).is_usable());
    assert_eq!(prices.get_unchecked(2).source, PriceSource::Unavailable);
}

#[test]
fn should_fail_without_feed_or_fallback() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool
            .try_get_price(&Address::generate(&env))
            .unwrap_err()
            .unwrap(),
        Error::NoPriceFeed
    );
}

#[test]
fn should_follow_feed_updates() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.collateral.address();

    env.ledger().with_mut(|li| li.timestamp = START + DAY);
    set_feed_price(&sut, &asset, 2_750, START + DAY - 10);

    let price = sut.pool.get_price(&asset);

    assert!(!price.stale);
    assert_eq!(price.price, usd(2_750));
    assert_eq!(price.updated_at, START + DAY - 10);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #4)")]
fn should_require_fallback_permission() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.set_fallback_price(
        &Address::generate(&env),
        &sut.collateral.address(),
        &usd(1),
    );
}
