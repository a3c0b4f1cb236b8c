use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAction {
    Borrow,
    Repay,
}

/// Payload exchanged between pools on different chains
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossChainMessage {
    pub account: Address,
    pub action: MessageAction,
    pub asset: Address,
    pub amount: i128,
    pub source_chain: u64,
    pub destination_chain: u64,
    pub receiver: Address,
    pub nonce: u64,
}
