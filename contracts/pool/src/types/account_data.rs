use common::FixedI128;
use pool_interface::types::account_position::AccountPosition;

/// Aggregated valuation of an account. Values are USD with 18 decimals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountData {
    pub collateral_value: i128,
    pub debt_value: i128,
    pub weighted_collateral: i128,
    pub borrow_capacity: i128,
    pub health_factor: i128,
}

impl AccountData {
    pub fn has_debt(&self) -> bool {
        self.debt_value > 0
    }

    /// Health factor of at least 1.0
    pub fn is_healthy(&self) -> bool {
        self.health_factor >= FixedI128::ONE.into_inner()
    }

    /// Debt within Σ collateral value × LTV
    pub fn is_within_capacity(&self) -> bool {
        self.debt_value <= self.borrow_capacity
    }

    pub fn to_position(&self, updated_at: u64) -> AccountPosition {
        AccountPosition {
            collateral_value: self.collateral_value,
            debt_value: self.debt_value,
            weighted_collateral: self.weighted_collateral,
            borrow_capacity: self.borrow_capacity,
            health_factor: self.health_factor,
            updated_at,
        }
    }
}
