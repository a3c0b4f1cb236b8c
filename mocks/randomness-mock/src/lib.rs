#![deny(warnings)]
#![no_std]

mod storage;
#[cfg(test)]
mod test;

use randomness_interface::{RandomnessConsumerClient, RandomnessTrait};
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

use crate::storage::*;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    UnknownRequest = 0,
}

#[contract]
pub struct RandomnessMock;

#[contractimpl]
impl RandomnessTrait for RandomnessMock {
    fn request_random(env: Env, requester: Address) -> u64 {
        let id = next_request_id(&env);
        write_requester(&env, id, &requester);

        id
    }
}

#[contractimpl]
impl RandomnessMock {
    pub fn pending(env: Env, id: u64) -> Option<Address> {
        read_requester(&env, id)
    }

    /// Delivers `value` to the contract that made request `id`
    pub fn fulfill(env: Env, id: u64, value: u64) {
        let requester =
            read_requester(&env, id).unwrap_or_else(|| panic_with_error!(&env, Error::UnknownRequest));

        remove_request(&env, id);

        RandomnessConsumerClient::new(&env, &requester).on_random_fulfilled(&id, &value);
    }
}
