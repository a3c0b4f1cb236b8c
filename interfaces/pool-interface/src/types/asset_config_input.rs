use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetConfigInput {
    pub asset: Address,
    pub synthetic: Option<Address>,
    pub decimals: u32,
    pub ltv: u32,
    pub liquidation_threshold: u32,
    pub collateral_enabled: bool,
    pub borrow_enabled: bool,
}
