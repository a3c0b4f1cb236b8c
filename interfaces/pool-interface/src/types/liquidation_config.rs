use soroban_sdk::contracttype;

pub const DEFAULT_LIQUIDATION_THRESHOLD: u32 = 9_500;
pub const DEFAULT_LIQUIDATION_BONUS: u32 = 500;
pub const DEFAULT_CLOSE_FACTOR: u32 = 5_000;
pub const MAX_LIQUIDATION_BONUS: u32 = 2_000;

/// Per debt asset liquidation parameters in basis points.
/// `threshold` is compared against the health factor.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidationConfig {
    pub threshold: u32,
    pub bonus: u32,
    pub close_factor: u32,
    pub active: bool,
}

impl Default for LiquidationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LIQUIDATION_THRESHOLD,
            bonus: DEFAULT_LIQUIDATION_BONUS,
            close_factor: DEFAULT_CLOSE_FACTOR,
            active: true,
        }
    }
}
