pub mod borrow_cross_chain;
pub mod check_rate_limit;
pub mod deposit;
pub mod get_price;
pub mod grant_permission;
pub mod health_monitor;
pub mod initialize;
pub mod liquidate;
pub mod receive_message;
pub mod refresh;
pub mod repay;
pub mod repay_cross_chain;
pub mod revoke_permission;
pub mod set_asset;
pub mod set_asset_status;
pub mod set_chain;
pub mod set_emergency_mode;
pub mod set_fallback_price;
pub mod set_liquidation_config;
pub mod set_pause;
pub mod set_pool_configuration;
pub mod set_price_feeds;
pub mod set_rate_limit;
pub mod set_user_permissions;
pub mod utils;
pub mod withdraw;
