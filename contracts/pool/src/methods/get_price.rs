use pool_interface::types::asset_price::AssetPrice;
use pool_interface::types::error::Error;
use soroban_sdk::{vec, Address, Env, Vec};

use crate::types::price_provider::PriceProvider;

pub fn get_price(env: &Env, asset: &Address) -> Result<AssetPrice, Error> {
    PriceProvider::new(env).price(asset)
}

/// Every asset is priced independently, unconfigured assets are reported unavailable
pub fn get_prices(env: &Env, assets: &Vec<Address>) -> Vec<AssetPrice> {
    let mut prices = PriceProvider::new(env);
    let mut result = vec![env];

    for asset in assets.iter() {
        let price = prices
            .price(&asset)
            .unwrap_or_else(|_| AssetPrice::unavailable(&asset));

        result.push_back(price);
    }

    result
}
