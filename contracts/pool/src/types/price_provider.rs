use common::{mul_div_floor, FixedI128, ONE_DAY};
use pool_interface::types::asset_price::{AssetPrice, PriceSource};
use pool_interface::types::error::Error;
use pool_interface::types::fallback_price::FallbackPrice;
use pool_interface::types::price_feed_config::PriceFeedConfig;
use pool_interface::types::timestamp_precision::TimestampPrecision;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env, Map};

use crate::storage::{read_fallback_price, read_price_feed};

/// Upper bound of the age of any accepted price, feed or fallback
pub const MAX_STALENESS: u64 = ONE_DAY;

/// Reads prices once per invocation and converts between asset amounts and
/// 18 decimal USD values.
pub struct PriceProvider<'a> {
    env: &'a Env,
    prices: Map<Address, AssetPrice>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            prices: Map::new(env),
        }
    }

    /// Returns the price with its staleness flag.
    /// Fails only when the asset has neither a feed nor a fallback price.
    pub fn price(&mut self, asset: &Address) -> Result<AssetPrice, Error> {
        if let Some(price) = self.prices.get(asset.clone()) {
            return Ok(price);
        }

        let config = read_price_feed(self.env, asset);
        let fallback = read_fallback_price(self.env, asset);

        if config.is_none() && fallback.is_none() {
            return Err(Error::NoPriceFeed);
        }

        let price = evaluate_price(self.env, asset, config.as_ref(), fallback.as_ref());
        self.prices.set(asset.clone(), price.clone());

        Ok(price)
    }

    /// Price usable for valuation, stale or missing prices fail the caller
    pub fn usable_price(&mut self, asset: &Address) -> Result<i128, Error> {
        let price = self.price(asset)?;

        if !price.is_usable() {
            return Err(Error::StalePrice);
        }

        Ok(price.price)
    }

    /// `amount * price / 10^decimals`
    pub fn to_value(&mut self, asset: &Address, decimals: u32, amount: i128) -> Result<i128, Error> {
        if amount == 0 {
            return Ok(0);
        }

        let price = self.usable_price(asset)?;
        let unit = 10i128.checked_pow(decimals).ok_or(Error::MathOverflowError)?;

        mul_div_floor(self.env, amount, price, unit).ok_or(Error::MathOverflowError)
    }

    /// `value * 10^decimals / price`
    pub fn from_value(&mut self, asset: &Address, decimals: u32, value: i128) -> Result<i128, Error> {
        if value == 0 {
            return Ok(0);
        }

        let price = self.usable_price(asset)?;
        let unit = 10i128.checked_pow(decimals).ok_or(Error::MathOverflowError)?;

        mul_div_floor(self.env, value, unit, price).ok_or(Error::MathOverflowError)
    }
}

/// Primary feed first, fallback when the feed is missing, failing or stale.
fn evaluate_price(
    env: &Env,
    asset: &Address,
    config: Option<&PriceFeedConfig>,
    fallback: Option<&FallbackPrice>,
) -> AssetPrice {
    let now = env.ledger().timestamp();

    let primary = config
        .filter(|config| config.active)
        .and_then(|config| read_feed(env, config).map(|price| (config.heartbeat, price)));

    if let Some((heartbeat, (price, updated_at))) = primary {
        let staleness = now.saturating_sub(updated_at);

        if staleness <= heartbeat && staleness <= MAX_STALENESS {
            return AssetPrice {
                asset: asset.clone(),
                price,
                updated_at,
                stale: false,
                source: PriceSource::Feed,
            };
        }
    }

    if let Some(fallback) = fallback {
        if fallback.price > 0 && now.saturating_sub(fallback.timestamp) < MAX_STALENESS {
            return AssetPrice {
                asset: asset.clone(),
                price: fallback.price,
                updated_at: fallback.timestamp,
                stale: false,
                source: PriceSource::Fallback,
            };
        }
    }

    match primary {
        Some((_, (price, updated_at))) => AssetPrice {
            asset: asset.clone(),
            price,
            updated_at,
            stale: true,
            source: PriceSource::Feed,
        },
        None => AssetPrice::unavailable(asset),
    }
}

/// Returns the normalized feed price and its timestamp in seconds.
/// A failed call or a non positive price is reported as `None`.
fn read_feed(env: &Env, config: &PriceFeedConfig) -> Option<(i128, u64)> {
    let client = PriceFeedClient::new(env, &config.feed);

    let data = match client.try_lastprice(&config.feed_asset.clone().into()) {
        Ok(Ok(Some(data))) => data,
        _ => return None,
    };

    if data.price <= 0 {
        return None;
    }

    let updated_at = match config.timestamp_precision {
        TimestampPrecision::Milli => data.timestamp / 1000,
        TimestampPrecision::Seconds => data.timestamp,
    };

    let price = FixedI128::from_decimals(data.price, config.feed_decimals)?;

    price.is_positive().then_some((price.into_inner(), updated_at))
}
