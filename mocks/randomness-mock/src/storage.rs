use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Counter,
    Request(u64),
}

pub fn next_request_id(env: &Env) -> u64 {
    let id = env
        .storage()
        .instance()
        .get(&DataKey::Counter)
        .unwrap_or(0u64)
        + 1;

    env.storage().instance().set(&DataKey::Counter, &id);

    id
}

pub fn read_requester(env: &Env, id: u64) -> Option<Address> {
    env.storage().instance().get(&DataKey::Request(id))
}

pub fn write_requester(env: &Env, id: u64, requester: &Address) {
    env.storage().instance().set(&DataKey::Request(id), requester);
}

pub fn remove_request(env: &Env, id: u64) {
    env.storage().instance().remove(&DataKey::Request(id));
}
