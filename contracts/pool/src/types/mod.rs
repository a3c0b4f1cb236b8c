pub mod access_control;
pub mod account_data;
pub mod cross_chain_messenger;
pub mod health_monitor;
pub mod liquidation_engine;
pub mod non_reentrant;
pub mod position_ledger;
pub mod price_provider;
pub mod rate_limiter;
