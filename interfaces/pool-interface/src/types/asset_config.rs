use soroban_sdk::{contracttype, Address};

use super::asset_config_input::AssetConfigInput;

/// Collateral or debt eligible asset.
/// LTV and liquidation threshold are expressed in basis points.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetConfig {
    pub asset: Address,
    /// Position in the account bitmap
    pub index: u32,
    /// Synthetic token minted on this chain for debt drawn against remote collateral
    pub synthetic: Option<Address>,
    pub decimals: u32,
    pub ltv: u32,
    pub liquidation_threshold: u32,
    pub collateral_enabled: bool,
    pub borrow_enabled: bool,
    pub active: bool,
}

impl AssetConfig {
    pub fn new(input: &AssetConfigInput, index: u32) -> Self {
        Self {
            asset: input.asset.clone(),
            index,
            synthetic: input.synthetic.clone(),
            decimals: input.decimals,
            ltv: input.ltv,
            liquidation_threshold: input.liquidation_threshold,
            collateral_enabled: input.collateral_enabled,
            borrow_enabled: input.borrow_enabled,
            active: true,
        }
    }
}
