use soroban_sdk::{contracttype, Address, BytesN, Vec};

use super::governor_call::GovernorCall;
use super::operation_kind::OperationKind;

#[contracttype]
#[derive(Clone)]
pub struct Operation {
    pub id: BytesN<32>,
    pub call: GovernorCall,
    pub kind: OperationKind,
    pub proposer: Address,
    pub proposed_at: u64,
    pub execute_after: u64,
    pub approvals: Vec<Address>,
    pub executed: bool,
    pub cancelled: bool,
}

impl Operation {
    pub fn approvals_count(&self) -> u32 {
        self.approvals.len()
    }
}
