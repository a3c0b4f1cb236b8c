use soroban_sdk::{contracttype, Address, String};

use super::oracle_asset::OracleAsset;
use super::timestamp_precision::TimestampPrecision;

#[derive(Clone, Debug)]
#[contracttype]
pub struct PriceFeedConfigInput {
    pub asset: Address,
    pub feed: Address,
    pub feed_asset: OracleAsset,
    pub feed_decimals: u32,
    pub timestamp_precision: TimestampPrecision,
    pub heartbeat: u64,
    pub active: bool,
    pub description: String,
}
