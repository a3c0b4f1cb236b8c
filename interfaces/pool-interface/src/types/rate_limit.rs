use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateLimitAlgorithm {
    /// Windows aligned to multiples of `window`
    FixedWindow,
    /// Window starts at the first request of the account
    SlidingWindow,
    TokenBucket,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimit {
    pub algorithm: RateLimitAlgorithm,
    pub max_requests: u32,
    /// Seconds
    pub window: u64,
    pub bucket_size: u32,
    /// Tokens added every `refill_period` seconds
    pub refill_rate: u32,
    pub refill_period: u64,
    /// Seconds an account is blocked after a violation
    pub base_block_duration: u64,
    pub enabled: bool,
}
