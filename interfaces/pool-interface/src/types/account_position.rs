use soroban_sdk::contracttype;

/// Account summary. Values are USD with 18 decimals.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountPosition {
    pub collateral_value: i128,
    pub debt_value: i128,
    /// Σ collateral value × liquidation threshold
    pub weighted_collateral: i128,
    /// Σ collateral value × LTV
    pub borrow_capacity: i128,
    /// `i128::MAX` when the account has no debt
    pub health_factor: i128,
    pub updated_at: u64,
}
