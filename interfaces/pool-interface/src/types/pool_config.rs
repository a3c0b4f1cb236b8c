use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct PoolConfig {
    /// Identifier of the chain this pool runs on
    pub chain_id: u64,
    /// Token the transport fee is paid in
    pub fee_token: Address,
    pub transport: Address,
    pub randomness: Option<Address>,
    /// Health factor below which upkeep queues emergency liquidations, 18 decimals
    pub critical_health_factor: i128,
    pub max_emergency_per_hour: u32,
    /// Security score (0 - 100) below which upkeep pauses the protocol
    pub security_pause_threshold: u32,
    /// Seconds without activity adding to the account risk score
    pub inactivity_period: u64,
}
