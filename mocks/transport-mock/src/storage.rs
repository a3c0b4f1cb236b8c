use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Fee,
    Failing,
    Counter,
    Message(BytesN<32>),
}

/// Payload accepted by `send`, waiting for delivery
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct SentMessage {
    pub sender: Address,
    pub destination_chain: u64,
    pub payload: Bytes,
}

pub fn read_fee(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Fee).unwrap_or(0)
}

pub fn write_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::Fee, &fee);
}

pub fn is_failing(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Failing)
        .unwrap_or(false)
}

pub fn write_failing(env: &Env, value: bool) {
    env.storage().instance().set(&DataKey::Failing, &value);
}

pub fn next_counter(env: &Env) -> u64 {
    let counter = env
        .storage()
        .instance()
        .get(&DataKey::Counter)
        .unwrap_or(0u64)
        + 1;

    env.storage().instance().set(&DataKey::Counter, &counter);

    counter
}

pub fn read_message(env: &Env, id: &BytesN<32>) -> Option<SentMessage> {
    env.storage().instance().get(&DataKey::Message(id.clone()))
}

pub fn write_message(env: &Env, id: &BytesN<32>, message: &SentMessage) {
    env.storage()
        .instance()
        .set(&DataKey::Message(id.clone()), message);
}
