use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationOpportunity {
    pub account: Address,
    pub health_factor: i128,
    pub debt_value: i128,
}
