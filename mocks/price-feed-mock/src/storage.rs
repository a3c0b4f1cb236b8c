use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, Env};

pub const DEFAULT_DECIMALS: u32 = 14;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Price(Asset),
    Decimals,
    Unavailable,
}

pub fn write_price(env: &Env, asset: &Asset, data: &PriceData) {
    env.storage()
        .instance()
        .set(&DataKey::Price(asset.clone()), data);
}

pub fn read_price(env: &Env, asset: &Asset) -> Option<PriceData> {
    env.storage().instance().get(&DataKey::Price(asset.clone()))
}

pub fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn read_decimals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .unwrap_or(DEFAULT_DECIMALS)
}

pub fn write_unavailable(env: &Env, value: bool) {
    env.storage().instance().set(&DataKey::Unavailable, &value);
}

pub fn is_unavailable(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Unavailable)
        .unwrap_or(false)
}
