use soroban_sdk::{contracttype, Address};

use super::liquidation_result::LiquidationResult;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationCall {
    pub account: Address,
    pub collateral_asset: Address,
    pub debt_asset: Address,
    pub debt_amount: i128,
}

/// Per item result of a batch liquidation. `error` holds the pool error code on failure.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationOutcome {
    pub account: Address,
    pub result: Option<LiquidationResult>,
    pub error: Option<u32>,
}
