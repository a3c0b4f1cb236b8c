use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRisk {
    /// 0 - 100
    pub risk_score: u32,
    pub liquidation_count: u32,
    pub last_activity: u64,
    pub last_scan: u64,
}
