use soroban_sdk::{symbol_short, Address, Env, String};

pub(crate) fn initialized(e: &Env, pool: Address, decimals: u32, name: String, symbol: String) {
    let topics = (symbol_short!("init"), pool);
    e.events().publish(topics, (decimals, name, symbol));
}

pub(crate) fn mint(e: &Env, pool: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("mint"), pool, to);
    e.events().publish(topics, amount);
}

pub(crate) fn burn(e: &Env, from: Address, amount: i128) {
    let topics = (symbol_short!("burn"), from);
    e.events().publish(topics, amount);
}

pub(crate) fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from, to);
    e.events().publish(topics, amount);
}
