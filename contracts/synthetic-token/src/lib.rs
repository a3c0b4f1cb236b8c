#![deny(warnings)]
#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use synthetic_token_interface::SyntheticTokenTrait;

use crate::balance::{add_total_supply, receive_balance, spend_balance};
use crate::storage::*;

mod balance;
mod event;
mod storage;

#[contract]
pub struct SyntheticToken;

fn verify_caller_is_pool(env: &Env) -> Address {
    let pool = read_pool(env);
    pool.require_auth();
    pool
}

#[contractimpl]
impl SyntheticTokenTrait for SyntheticToken {
    /// Initializes the synthetic token.
    ///
    /// # Arguments
    ///
    /// - name - The name of the token.
    /// - symbol - The symbol of the token.
    /// - decimals - Decimals of the represented asset.
    /// - pool - The pool allowed to mint and burn.
    ///
    /// # Panics
    ///
    /// Panics if the contract has already been initialized.
    /// Panics if name or symbol is empty
    ///
    fn initialize(env: Env, name: String, symbol: String, decimals: u32, pool: Address) {
        if name.len() == 0 {
            panic!("synthetic-token: no name");
        }

        if symbol.len() == 0 {
            panic!("synthetic-token: no symbol");
        }

        if has_pool(&env) {
            panic!("synthetic-token: already initialized");
        }

        write_pool(&env, &pool);
        write_metadata(&env, name.clone(), symbol.clone(), decimals);

        event::initialized(&env, pool, decimals, name, symbol);
    }

    fn version() -> u32 {
        1
    }

    fn pool(env: Env) -> Address {
        read_pool(&env)
    }

    fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    /// Transfers `amount` from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` has not authorized the call.
    /// Panics if the balance of `from` is below `amount`.
    ///
    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        event::transfer(&env, from, to, amount);
    }

    /// Mints `amount` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the pool.
    ///
    fn mint(env: Env, to: Address, amount: i128) {
        let pool = verify_caller_is_pool(&env);

        receive_balance(&env, &to, amount);
        add_total_supply(&env, amount);

        event::mint(&env, pool, to, amount);
    }

    /// Burns `amount` held by `from`.
    ///
    /// # Panics
    ///
    /// Panics if the caller is not the pool.
    /// Panics if the balance of `from` is below `amount`.
    ///
    fn burn(env: Env, from: Address, amount: i128) {
        verify_caller_is_pool(&env);

        spend_balance(&env, &from, amount);
        add_total_supply(&env, -amount);

        event::burn(&env, from, amount);
    }

    fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimal
    }

    fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }

    fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }
}
