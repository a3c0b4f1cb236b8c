use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    /// Grant and revoke permissions
    Permission,
    ManageAssets,
    ManageUsers,
    SetChains,
    SetFallbackPrice,
    SetLiquidationParams,
    SetPause,
    SetPoolConfiguration,
    SetPriceFeeds,
    SetRateLimits,
    /// Exit emergency mode and act while it is on
    EmergencyOperator,
    /// Member of the authorized liquidator pool
    Liquidator,
    /// Runs health monitor upkeep
    Keeper,
}
