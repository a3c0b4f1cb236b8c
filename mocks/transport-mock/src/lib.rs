#![deny(warnings)]
#![no_std]

mod storage;
#[cfg(test)]
mod test;

use pool_interface::LendingPoolClient;
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Bytes, BytesN, Env};
use transport_interface::TransportTrait;

use crate::storage::*;
pub use crate::storage::SentMessage;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    TransportUnavailable = 0,
}

#[contract]
pub struct TransportMock;

#[contractimpl]
impl TransportTrait for TransportMock {
    fn quote_fee(env: Env, _destination_chain: u64, _payload: Bytes) -> i128 {
        if is_failing(&env) {
            panic_with_error!(&env, Error::TransportUnavailable);
        }

        read_fee(&env)
    }

    fn send(env: Env, sender: Address, destination_chain: u64, payload: Bytes) -> BytesN<32> {
        sender.require_auth();

        if is_failing(&env) {
            panic_with_error!(&env, Error::TransportUnavailable);
        }

        let mut seed = payload.clone();
        seed.extend_from_array(&next_counter(&env).to_be_bytes());

        let id: BytesN<32> = env.crypto().sha256(&seed).into();

        write_message(
            &env,
            &id,
            &SentMessage {
                sender,
                destination_chain,
                payload,
            },
        );

        id
    }
}

#[contractimpl]
impl TransportMock {
    pub fn set_fee(env: Env, fee: i128) {
        write_fee(&env, fee);
    }

    /// Makes `quote_fee` and `send` fail
    pub fn set_failing(env: Env, value: bool) {
        write_failing(&env, value);
    }

    pub fn message(env: Env, id: BytesN<32>) -> Option<SentMessage> {
        read_message(&env, &id)
    }

    /// Delivers a payload to a pool the way a relayer would.
    /// Returns whether the pool accepted it.
    pub fn deliver(env: Env, pool: Address, id: BytesN<32>, payload: Bytes) -> bool {
        matches!(
            LendingPoolClient::new(&env, &pool).try_receive_message(&id, &payload),
            Ok(Ok(_))
        )
    }
}
