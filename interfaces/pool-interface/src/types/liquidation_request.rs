use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationRequest {
    pub id: u64,
    pub account: Address,
    pub requester: Address,
    /// None for emergency requests, any authorized liquidator may execute them
    pub liquidator: Option<Address>,
    /// Debt value in USD that may be liquidated, 18 decimals
    pub amount: i128,
    pub created_at: u64,
    pub executed: bool,
    /// Emergency request closed by upkeep after the account recovered
    pub expired: bool,
    pub emergency: bool,
    pub awaiting_randomness: bool,
}
