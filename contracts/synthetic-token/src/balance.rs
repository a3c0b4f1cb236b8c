use soroban_sdk::{Address, Env};

use crate::storage::{read_balance, read_total_supply, write_balance, write_total_supply};

pub fn require_positive_amount(amount: i128) {
    if amount <= 0 {
        panic!("synthetic-token: zero or negative amount is not allowed: {}", amount)
    }
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) {
    require_positive_amount(amount);

    let balance = match read_balance(env, addr).checked_add(amount) {
        Some(balance) => balance,
        None => panic!("synthetic-token: balance overflow"),
    };

    write_balance(env, addr, balance);
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) {
    require_positive_amount(amount);

    let balance = read_balance(env, addr);

    if balance < amount {
        panic!("synthetic-token: insufficient balance");
    }

    write_balance(env, addr, balance - amount);
}

/// `amount` may be negative on burn
pub fn add_total_supply(env: &Env, amount: i128) {
    let total_supply = match read_total_supply(env).checked_add(amount) {
        Some(total_supply) if !total_supply.is_negative() => total_supply,
        _ => panic!("synthetic-token: invalid total supply"),
    };

    write_total_supply(env, total_supply);
}
