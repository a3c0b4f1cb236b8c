#![deny(warnings)]
#![no_std]

mod storage;
pub mod types;

use crate::storage::*;
use crate::types::error::Error;
use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, panic_with_error, vec, Env, Symbol, Vec};

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn base(env: Env) -> Asset {
        Asset::Other(Symbol::new(&env, "USD"))
    }

    fn assets(env: Env) -> Vec<Asset> {
        vec![&env]
    }

    fn decimals(env: Env) -> u32 {
        read_decimals(&env)
    }

    fn resolution(_env: Env) -> u32 {
        300
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        if is_unavailable(&env) {
            panic_with_error!(&env, Error::FeedUnavailable);
        }

        read_price(&env, &asset)
    }
}

#[contractimpl]
impl PriceFeedMock {
    /// Sets the latest price of an asset, not a SEP-40 method
    pub fn set_price(env: Env, asset: Asset, price: i128, timestamp: u64) {
        write_price(&env, &asset, &PriceData { price, timestamp });
    }

    pub fn set_decimals(env: Env, decimals: u32) {
        write_decimals(&env, decimals);
    }

    /// Makes every `lastprice` call fail
    pub fn set_unavailable(env: Env, value: bool) {
        write_unavailable(&env, value);
    }
}
