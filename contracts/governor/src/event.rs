use governor_interface::types::operation::Operation;
use soroban_sdk::{Address, BytesN, Env, Symbol};

pub(crate) fn initialized(e: &Env, threshold: u32, signers: u32) {
    e.events()
        .publish((Symbol::new(e, "initialize"),), (threshold, signers));
}

pub(crate) fn proposed(e: &Env, operation: &Operation) {
    let topics = (Symbol::new(e, "proposed"), operation.proposer.clone());
    e.events().publish(
        topics,
        (
            operation.id.clone(),
            operation.call.target.clone(),
            operation.call.function.clone(),
            operation.execute_after,
        ),
    );
}

pub(crate) fn approved(e: &Env, signer: &Address, id: &BytesN<32>, approvals: u32) {
    let topics = (Symbol::new(e, "approved"), signer.clone());
    e.events().publish(topics, (id.clone(), approvals));
}

pub(crate) fn executed(e: &Env, executor: &Address, id: &BytesN<32>) {
    let topics = (Symbol::new(e, "executed"), executor.clone());
    e.events().publish(topics, id.clone());
}

pub(crate) fn cancelled(e: &Env, signer: &Address, id: &BytesN<32>) {
    let topics = (Symbol::new(e, "cancelled"), signer.clone());
    e.events().publish(topics, id.clone());
}
