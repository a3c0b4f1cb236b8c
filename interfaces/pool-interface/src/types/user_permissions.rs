use soroban_sdk::{contracttype, Env, Map};

use super::action::Action;
use super::permission_level::PermissionLevel;

/// Caps and limits are USD values with 18 decimals, 0 means unlimited
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserPermissions {
    pub level: PermissionLevel,
    pub whitelisted: bool,
    pub blacklisted: bool,
    pub max_deposit: i128,
    pub max_borrow: i128,
    pub daily_limit: i128,
    pub daily_used: i128,
    pub last_reset: u64,
    pub overrides: Map<Action, bool>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct UserPermissionsInput {
    pub level: PermissionLevel,
    pub whitelisted: bool,
    pub blacklisted: bool,
    pub max_deposit: i128,
    pub max_borrow: i128,
    pub daily_limit: i128,
}

impl UserPermissions {
    pub fn new(env: &Env) -> Self {
        Self {
            level: PermissionLevel::User,
            whitelisted: false,
            blacklisted: false,
            max_deposit: 0,
            max_borrow: 0,
            daily_limit: 0,
            daily_used: 0,
            last_reset: 0,
            overrides: Map::new(env),
        }
    }
}
