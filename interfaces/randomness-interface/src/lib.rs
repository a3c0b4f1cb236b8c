#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};

pub struct Spec;

/// Randomness source. Requests are fulfilled asynchronously by calling
/// `on_random_fulfilled` on the requester.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "RandomnessClient")]
pub trait RandomnessTrait {
    fn request_random(env: Env, requester: Address) -> u64;
}

/// Callback implemented by contracts consuming randomness
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "RandomnessConsumerClient")]
pub trait RandomnessConsumerTrait {
    fn on_random_fulfilled(env: Env, request_id: u64, value: u64);
}
