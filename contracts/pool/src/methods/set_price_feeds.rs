use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::price_feed_config::PriceFeedConfig;
use pool_interface::types::price_feed_config_input::PriceFeedConfigInput;
use soroban_sdk::{assert_with_error, Address, Env, Vec};

use crate::storage::write_price_feed;

use super::utils::validation::require_permission;

pub fn set_price_feeds(
    env: &Env,
    who: &Address,
    inputs: &Vec<PriceFeedConfigInput>,
) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetPriceFeeds)?;

    for input in inputs.iter() {
        assert_with_error!(env, input.heartbeat > 0, Error::InvalidConfig);
        assert_with_error!(env, input.feed_decimals <= 38, Error::InvalidConfig);

        write_price_feed(env, &input.asset, &PriceFeedConfig::new(&input));
    }

    Ok(())
}
