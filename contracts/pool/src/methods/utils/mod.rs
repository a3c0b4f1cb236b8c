pub mod user_action;
pub mod validation;
