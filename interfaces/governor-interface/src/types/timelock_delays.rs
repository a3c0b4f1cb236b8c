use soroban_sdk::contracttype;

use super::operation_kind::OperationKind;

pub const STANDARD_DELAY: u64 = 24 * 60 * 60;
pub const CRITICAL_DELAY: u64 = 72 * 60 * 60;
pub const EMERGENCY_DELAY: u64 = 60 * 60;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelockDelays {
    pub standard: u64,
    pub critical: u64,
    pub emergency: u64,
}

impl Default for TimelockDelays {
    fn default() -> Self {
        Self {
            standard: STANDARD_DELAY,
            critical: CRITICAL_DELAY,
            emergency: EMERGENCY_DELAY,
        }
    }
}

impl TimelockDelays {
    pub fn delay(&self, kind: OperationKind) -> u64 {
        match kind {
            OperationKind::Instant => 0,
            OperationKind::Standard => self.standard,
            OperationKind::Critical => self.critical,
            OperationKind::Emergency => self.emergency,
        }
    }
}
