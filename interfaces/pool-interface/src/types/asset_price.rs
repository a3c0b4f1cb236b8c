use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceSource {
    Feed,
    Fallback,
    Unavailable,
}

/// Price normalized to 18 decimals
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPrice {
    pub asset: Address,
    pub price: i128,
    pub updated_at: u64,
    pub stale: bool,
    pub source: PriceSource,
}

impl AssetPrice {
    pub fn unavailable(asset: &Address) -> Self {
        Self {
            asset: asset.clone(),
            price: 0,
            updated_at: 0,
            stale: true,
            source: PriceSource::Unavailable,
        }
    }

    pub fn is_usable(&self) -> bool {
        !self.stale && self.price > 0
    }
}
