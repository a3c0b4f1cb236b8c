use soroban_sdk::contracttype;

/// Protocol wide mutable state. `version` grows on every change.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolState {
    pub paused: bool,
    pub emergency_mode: bool,
    /// 0 - 100, recomputed by upkeep
    pub security_score: u32,
    pub version: u32,
}

impl Default for ProtocolState {
    fn default() -> Self {
        Self {
            paused: false,
            emergency_mode: false,
            security_score: 100,
            version: 0,
        }
    }
}
