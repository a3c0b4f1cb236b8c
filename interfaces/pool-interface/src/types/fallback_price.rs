use soroban_sdk::contracttype;

/// Governance price override, 18 decimals
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackPrice {
    pub price: i128,
    pub timestamp: u64,
}
