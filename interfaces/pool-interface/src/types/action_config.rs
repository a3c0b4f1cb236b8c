use soroban_sdk::contracttype;

use super::permission_level::PermissionLevel;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionConfig {
    pub min_level: PermissionLevel,
    pub whitelist_required: bool,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            min_level: PermissionLevel::User,
            whitelist_required: false,
        }
    }
}
