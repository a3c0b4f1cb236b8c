#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, String};

pub struct Spec;

/// Interface for the synthetic representation of an asset borrowed on a remote chain
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "SyntheticTokenClient")]
pub trait SyntheticTokenTrait {
    fn initialize(env: Env, name: String, symbol: String, decimals: u32, pool: Address);

    fn version() -> u32;

    fn pool(env: Env) -> Address;

    fn balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    /// Pool only
    fn mint(env: Env, to: Address, amount: i128);

    /// Pool only
    fn burn(env: Env, from: Address, amount: i128);

    fn decimals(env: Env) -> u32;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn total_supply(env: Env) -> i128;
}
