use randomness_interface::RandomnessConsumerTrait;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use crate::{RandomnessMock, RandomnessMockClient};

#[contracttype]
pub enum ConsumerKey {
    Received,
}

#[contract]
pub struct Consumer;

#[contractimpl]
impl RandomnessConsumerTrait for Consumer {
    fn on_random_fulfilled(env: Env, request_id: u64, value: u64) {
        env.storage()
            .instance()
            .set(&ConsumerKey::Received, &(request_id, value));
    }
}

#[test]
fn fulfill_calls_back_requester() {
    let env = Env::default();

    let randomness = RandomnessMockClient::new(&env, &env.register_contract(None, RandomnessMock));
    let consumer: Address = env.register_contract(None, Consumer);

    let first = randomness.request_random(&consumer);
    let second = randomness.request_random(&consumer);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(randomness.pending(&second), Some(consumer.clone()));

    randomness.fulfill(&second, &42);

    let received: Option<(u64, u64)> = env.as_contract(&consumer, || {
        env.storage().instance().get(&ConsumerKey::Received)
    });

    assert_eq!(received, Some((2, 42)));
    assert_eq!(randomness.pending(&second), None);
}

#[test]
#[should_panic]
fn fulfill_unknown_request_panics() {
    let env = Env::default();

    let randomness = RandomnessMockClient::new(&env, &env.register_contract(None, RandomnessMock));

    randomness.fulfill(&7, &1);
}
