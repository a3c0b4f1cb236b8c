use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserRateState {
    pub request_count: u32,
    pub window_start: u64,
    pub tokens: u32,
    /// Bucket starts full on first use
    pub bucket_initialized: bool,
    pub last_refill: u64,
    pub blocked_until: u64,
    pub last_violation: Option<u64>,
}
