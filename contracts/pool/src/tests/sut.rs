#![cfg(test)]
extern crate std;

use crate::*;
use pool_interface::types::asset_config_input::AssetConfigInput;
use pool_interface::types::oracle_asset::OracleAsset;
use pool_interface::types::rate_limit::RateLimitAlgorithm;
use pool_interface::types::timestamp_precision::TimestampPrecision;
use price_feed_interface::types::asset::Asset;
use price_feed_mock::{PriceFeedMock, PriceFeedMockClient};
use randomness_mock::{RandomnessMock, RandomnessMockClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::token::StellarAssetClient as TokenAdminClient;
use soroban_sdk::{vec, Env, String};
use synthetic_token::{SyntheticToken, SyntheticTokenClient};
use transport_mock::{TransportMock, TransportMockClient};

/// Ledger time the suite starts at, a multiple of every rate limit window used
pub const START: u64 = 1_800_000;
pub const HOUR: u64 = 60 * 60;
pub const DAY: u64 = 24 * HOUR;

pub const LOCAL_CHAIN: u64 = 1;
pub const REMOTE_CHAIN: u64 = 2;

pub const TOKEN_DECIMALS: u32 = 7;
pub const FEED_DECIMALS: u32 = 14;
pub const HEARTBEAT: u64 = HOUR;

/// 1.0 with 18 decimals
pub const ONE: i128 = 1_000_000_000_000_000_000;

/// Whole tokens in 7 decimal units
pub fn units(amount: i128) -> i128 {
    amount * 10_i128.pow(TOKEN_DECIMALS)
}

/// USD value with 18 decimals
pub fn usd(amount: i128) -> i128 {
    amount * ONE
}

pub(crate) struct AssetToken<'a> {
    pub token: TokenClient<'a>,
    pub token_admin: TokenAdminClient<'a>,
}

impl<'a> AssetToken<'a> {
    pub fn address(&self) -> Address {
        self.token.address.clone()
    }
}

pub(crate) struct Sut<'a> {
    pub pool: LendingPoolClient<'a>,
    pub price_feed: PriceFeedMockClient<'a>,
    pub transport: TransportMockClient<'a>,
    pub pool_admin: Address,
    /// ETH like collateral, borrowing disabled
    pub collateral: AssetToken<'a>,
    /// USDC like asset, collateral and borrowable
    pub debt: AssetToken<'a>,
    pub fee_token: AssetToken<'a>,
}

/// Pool on the remote chain holding the synthetic of the debt asset
pub(crate) struct RemoteSut<'a> {
    pub pool: LendingPoolClient<'a>,
    pub synthetic: SyntheticTokenClient<'a>,
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> AssetToken<'a> {
    let address = e.register_stellar_asset_contract_v2(admin.clone()).address();

    AssetToken {
        token: TokenClient::new(e, &address),
        token_admin: TokenAdminClient::new(e, &address),
    }
}

pub(crate) fn pool_config(
    chain_id: u64,
    fee_token: &Address,
    transport: &Address,
    randomness: Option<Address>,
) -> PoolConfig {
    PoolConfig {
        chain_id,
        fee_token: fee_token.clone(),
        transport: transport.clone(),
        randomness,
        critical_health_factor: ONE * 95 / 100,
        max_emergency_per_hour: 5,
        security_pause_threshold: 0,
        inactivity_period: 30 * DAY,
    }
}

pub(crate) fn create_pool_contract<'a>(
    e: &Env,
    admin: &Address,
    config: &PoolConfig,
) -> LendingPoolClient<'a> {
    let client = LendingPoolClient::new(e, &e.register_contract(None, LendingPool));

    client.initialize(admin, config);

    client
}

pub(crate) fn set_feed_price(sut: &Sut, asset: &Address, price: i128, timestamp: u64) {
    sut.price_feed.set_price(
        &Asset::Stellar(asset.clone()),
        &(price * 10_i128.pow(FEED_DECIMALS)),
        &timestamp,
    );
}

pub(crate) fn init_pool<'a>(env: &Env) -> Sut<'a> {
    env.budget().reset_unlimited();
    env.ledger().with_mut(|li| li.timestamp = START);

    let admin = Address::generate(env);
    let token_admin = Address::generate(env);

    let collateral = create_token_contract(env, &token_admin);
    let debt = create_token_contract(env, &token_admin);
    let fee_token = create_token_contract(env, &token_admin);

    let transport = TransportMockClient::new(env, &env.register_contract(None, TransportMock));
    let price_feed = PriceFeedMockClient::new(env, &env.register_contract(None, PriceFeedMock));

    let pool = create_pool_contract(
        env,
        &admin,
        &pool_config(LOCAL_CHAIN, &fee_token.address(), &transport.address, None),
    );

    pool.set_asset(
        &admin,
        &AssetConfigInput {
            asset: collateral.address(),
            synthetic: None,
            decimals: TOKEN_DECIMALS,
            ltv: 7_500,
            liquidation_threshold: 8_000,
            collateral_enabled: true,
            borrow_enabled: false,
        },
    );
    pool.set_asset(
        &admin,
        &AssetConfigInput {
            asset: debt.address(),
            synthetic: None,
            decimals: TOKEN_DECIMALS,
            ltv: 8_000,
            liquidation_threshold: 8_500,
            collateral_enabled: true,
            borrow_enabled: true,
        },
    );

    pool.set_price_feeds(
        &admin,
        &vec![
            env,
            PriceFeedConfigInput {
                asset: collateral.address(),
                feed: price_feed.address.clone(),
                feed_asset: OracleAsset::Stellar(collateral.address()),
                feed_decimals: FEED_DECIMALS,
                timestamp_precision: TimestampPrecision::Seconds,
                heartbeat: HEARTBEAT,
                active: true,
                description: String::from_str(env, "ETH / USD"),
            },
            PriceFeedConfigInput {
                asset: debt.address(),
                feed: price_feed.address.clone(),
                feed_asset: OracleAsset::Stellar(debt.address()),
                feed_decimals: FEED_DECIMALS,
                timestamp_precision: TimestampPrecision::Seconds,
                heartbeat: HEARTBEAT,
                active: true,
                description: String::from_str(env, "USDC / USD"),
            },
        ],
    );

    pool.set_chain(
        &admin,
        &ChainConfig {
            chain_id: REMOTE_CHAIN,
            enabled: true,
        },
    );

    let sut = Sut {
        pool,
        price_feed,
        transport,
        pool_admin: admin,
        collateral,
        debt,
        fee_token,
    };

    set_feed_price(&sut, &sut.collateral.address(), 3_000, START);
    set_feed_price(&sut, &sut.debt.address(), 1, START);

    sut
}

/// Second pool sharing the transport, configured to mint the synthetic of the debt asset
pub(crate) fn init_remote_pool<'a>(env: &Env, sut: &Sut) -> RemoteSut<'a> {
    let pool = create_pool_contract(
        env,
        &sut.pool_admin,
        &pool_config(
            REMOTE_CHAIN,
            &sut.fee_token.address(),
            &sut.transport.address,
            None,
        ),
    );

    let synthetic = SyntheticTokenClient::new(env, &env.register_contract(None, SyntheticToken));
    synthetic.initialize(
        &String::from_str(env, "Synthetic USDC"),
        &String::from_str(env, "sUSDC"),
        &TOKEN_DECIMALS,
        &pool.address,
    );

    pool.set_asset(
        &sut.pool_admin,
        &AssetConfigInput {
            asset: sut.debt.address(),
            synthetic: Some(synthetic.address.clone()),
            decimals: TOKEN_DECIMALS,
            ltv: 8_000,
            liquidation_threshold: 8_500,
            collateral_enabled: false,
            borrow_enabled: true,
        },
    );

    pool.set_chain(
        &sut.pool_admin,
        &ChainConfig {
            chain_id: LOCAL_CHAIN,
            enabled: true,
        },
    );

    RemoteSut { pool, synthetic }
}

/// Account with 10 collateral tokens deposited at $3000
pub(crate) fn fill_pool(env: &Env, sut: &Sut) -> Address {
    let borrower = Address::generate(env);

    sut.collateral.token_admin.mint(&borrower, &units(10));
    sut.pool
        .deposit(&borrower, &sut.collateral.address(), &units(10));

    borrower
}

/// Account with 10 collateral tokens and $22,000 of cross-chain debt.
/// Returns the borrower and the borrow message id.
pub(crate) fn fill_pool_with_debt(env: &Env, sut: &Sut) -> (Address, BytesN<32>) {
    let borrower = fill_pool(env, sut);

    let message_id = sut.pool.borrow_cross_chain(
        &borrower,
        &sut.debt.address(),
        &units(22_000),
        &REMOTE_CHAIN,
        &borrower,
    );

    (borrower, message_id)
}

/// Authorized liquidator funded with debt tokens
pub(crate) fn create_liquidator(env: &Env, sut: &Sut) -> Address {
    let liquidator = Address::generate(env);

    sut.pool
        .grant_permission(&sut.pool_admin, &liquidator, &Permission::Liquidator);
    sut.debt.token_admin.mint(&liquidator, &units(100_000));

    liquidator
}

pub(crate) fn drop_collateral_price(env: &Env, sut: &Sut, price: i128) {
    let now = env.ledger().timestamp();

    set_feed_price(sut, &sut.collateral.address(), price, now);
    set_feed_price(sut, &sut.debt.address(), 1, now);
}

pub(crate) fn create_randomness_contract<'a>(e: &Env) -> RandomnessMockClient<'a> {
    RandomnessMockClient::new(e, &e.register_contract(None, RandomnessMock))
}

pub(crate) fn fixed_window(max_requests: u32, window: u64, block: u64) -> RateLimit {
    RateLimit {
        algorithm: RateLimitAlgorithm::FixedWindow,
        max_requests,
        window,
        bucket_size: 0,
        refill_rate: 0,
        refill_period: 0,
        base_block_duration: block,
        enabled: true,
    }
}
