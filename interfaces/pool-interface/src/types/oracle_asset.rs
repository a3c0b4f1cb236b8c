use price_feed_interface::types::asset::Asset;
use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleAsset {
    Stellar(Address),
    Other(Symbol),
}

impl From<OracleAsset> for Asset {
    fn from(value: OracleAsset) -> Self {
        match value {
            OracleAsset::Stellar(address) => Asset::Stellar(address),
            OracleAsset::Other(symbol) => Asset::Other(symbol),
        }
    }
}
