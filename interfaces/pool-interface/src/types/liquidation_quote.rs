use soroban_sdk::contracttype;

/// Amounts are in asset native decimals
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationQuote {
    pub health_factor: i128,
    /// debt × close factor
    pub max_liquidatable_debt: i128,
    /// Debt repaid after the collateral clamp
    pub debt_to_cover: i128,
    pub collateral_to_seize: i128,
}
