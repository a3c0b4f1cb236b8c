use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationResult {
    pub account: Address,
    pub collateral_asset: Address,
    pub debt_asset: Address,
    pub debt_covered: i128,
    pub collateral_seized: i128,
    pub health_factor_after: i128,
}
