use soroban_sdk::{contracttype, Address, Vec};

use super::timelock_delays::TimelockDelays;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernorConfig {
    pub signers: Vec<Address>,
    pub threshold: u32,
    pub delays: TimelockDelays,
}
