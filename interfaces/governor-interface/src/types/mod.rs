pub mod error;
pub mod governor_call;
pub mod governor_config;
pub mod operation;
pub mod operation_kind;
pub mod timelock_delays;
