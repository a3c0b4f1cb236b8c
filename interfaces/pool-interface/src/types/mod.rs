pub mod account_position;
pub mod account_risk;
pub mod action;
pub mod action_config;
pub mod asset_config;
pub mod asset_config_input;
pub mod asset_price;
pub mod chain_config;
pub mod cross_chain_message;
pub mod error;
pub mod fallback_price;
pub mod liquidation_call;
pub mod liquidation_config;
pub mod liquidation_opportunity;
pub mod liquidation_quote;
pub mod liquidation_request;
pub mod liquidation_result;
pub mod oracle_asset;
pub mod permission;
pub mod permission_level;
pub mod pool_config;
pub mod position;
pub mod price_feed_config;
pub mod price_feed_config_input;
pub mod protocol_state;
pub mod rate_limit;
pub mod rate_limit_status;
pub mod timestamp_precision;
pub mod upkeep_report;
pub mod user_config;
pub mod user_permissions;
pub mod user_rate_state;
