use soroban_sdk::{contracttype, Address, String};

use super::oracle_asset::OracleAsset;
use super::price_feed_config_input::PriceFeedConfigInput;
use super::timestamp_precision::TimestampPrecision;

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct PriceFeedConfig {
    pub feed: Address,
    pub feed_asset: OracleAsset,
    pub feed_decimals: u32,
    pub timestamp_precision: TimestampPrecision,
    /// Max acceptable price age in seconds
    pub heartbeat: u64,
    pub active: bool,
    pub description: String,
}

impl PriceFeedConfig {
    pub fn new(input: &PriceFeedConfigInput) -> Self {
        Self {
            feed: input.feed.clone(),
            feed_asset: input.feed_asset.clone(),
            feed_decimals: input.feed_decimals,
            timestamp_precision: input.timestamp_precision.clone(),
            heartbeat: input.heartbeat,
            active: input.active,
            description: input.description.clone(),
        }
    }
}
