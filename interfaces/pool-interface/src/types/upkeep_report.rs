use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpkeepReport {
    pub scanned: u32,
    pub unhealthy: u32,
    /// Accounts whose prices could not be read
    pub unpriced: u32,
    pub emergency_queued: u32,
    /// Emergency liquidations over the hourly cap
    pub emergency_skipped: u32,
    pub security_score: u32,
    pub paused: bool,
}
