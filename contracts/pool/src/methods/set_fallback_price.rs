use pool_interface::types::error::Error;
use pool_interface::types::fallback_price::FallbackPrice;
use pool_interface::types::permission::Permission;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_fallback_price;

use super::utils::validation::{require_permission, require_positive};

/// Stores an 18 decimal override price stamped with the current time
pub fn set_fallback_price(env: &Env, who: &Address, asset: &Address, price: i128) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetFallbackPrice)?;
    require_positive(env, price);

    write_fallback_price(
        env,
        asset,
        &FallbackPrice {
            price,
            timestamp: env.ledger().timestamp(),
        },
    );

    event::fallback_price(env, asset, price);

    Ok(())
}
