use governor_interface::types::error::Error;
use governor_interface::types::governor_config::GovernorConfig;
use governor_interface::types::operation::Operation;
use soroban_sdk::{contracttype, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

pub(crate) const LOW_OPERATION_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_OPERATION_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Operation(BytesN<32>),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<GovernorConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn write_config(env: &Env, config: &GovernorConfig) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_operation(env: &Env, id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Operation(id.clone()))
}

pub fn read_operation(env: &Env, id: &BytesN<32>) -> Option<Operation> {
    let key = DataKey::Operation(id.clone());
    let operation = env.storage().persistent().get(&key);

    if operation.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_OPERATION_BUMP_LEDGERS,
            HIGH_OPERATION_BUMP_LEDGERS,
        );
    }

    operation
}

pub fn write_operation(env: &Env, operation: &Operation) {
    let key = DataKey::Operation(operation.id.clone());

    env.storage().persistent().set(&key, operation);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_OPERATION_BUMP_LEDGERS,
        HIGH_OPERATION_BUMP_LEDGERS,
    );
}
