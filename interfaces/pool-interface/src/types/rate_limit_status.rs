use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub allowed: bool,
    pub remaining: u32,
    /// Timestamp the current window or bucket level resets at
    pub reset_at: u64,
    /// Seconds to wait before the next attempt, 0 when allowed
    pub retry_after: u64,
    pub blocked_until: u64,
}
