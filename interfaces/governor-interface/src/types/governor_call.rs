use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

/// Contract call executed by the governor once approved
#[contracttype]
#[derive(Clone)]
pub struct GovernorCall {
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
}
