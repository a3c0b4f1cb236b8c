use common::ONE_DAY;
use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use pool_interface::types::user_permissions::UserPermissions;
use soroban_sdk::{Address, Env};

use crate::methods::utils::validation::has_permission;
use crate::storage::{
    read_action_config, read_protocol_state, read_user_permissions, write_user_permissions,
};

use super::account_data::AccountData;

/// Per account action checks, caps and the rolling daily limit
pub struct AccessControl<'a> {
    env: &'a Env,
    account: &'a Address,
    permissions: UserPermissions,
}

impl<'a> AccessControl<'a> {
    pub fn new(env: &'a Env, account: &'a Address) -> Self {
        Self {
            env,
            account,
            permissions: read_user_permissions(env, account),
        }
    }

    pub fn can_perform(&self, action: Action) -> bool {
        self.check(action).is_ok()
    }

    pub fn require_action(&self, action: Action) -> Result<(), Error> {
        self.check(action)
    }

    /// Collateral value after a deposit against `max_deposit`
    pub fn require_deposit_cap(&self, data: &AccountData) -> Result<(), Error> {
        let cap = self.permissions.max_deposit;

        if cap > 0 && data.collateral_value > cap {
            return Err(Error::DepositCapExceeded);
        }

        Ok(())
    }

    /// Debt value after a borrow against `max_borrow`
    pub fn require_borrow_cap(&self, data: &AccountData) -> Result<(), Error> {
        let cap = self.permissions.max_borrow;

        if cap > 0 && data.debt_value > cap {
            return Err(Error::BorrowCapExceeded);
        }

        Ok(())
    }

    /// Adds `value` to the amount used today and stores it.
    /// The counter resets once a day has passed since the last reset.
    pub fn consume_daily_limit(&mut self, value: i128) -> Result<(), Error> {
        let limit = self.permissions.daily_limit;

        if limit == 0 {
            return Ok(());
        }

        let now = self.env.ledger().timestamp();

        if now >= self.permissions.last_reset.saturating_add(ONE_DAY) {
            self.permissions.daily_used = 0;
            self.permissions.last_reset = now;
        }

        let used = self
            .permissions
            .daily_used
            .checked_add(value)
            .ok_or(Error::MathOverflowError)?;

        if used > limit {
            return Err(Error::DailyLimitExceeded);
        }

        self.permissions.daily_used = used;
        write_user_permissions(self.env, self.account, &self.permissions);

        Ok(())
    }

    fn check(&self, action: Action) -> Result<(), Error> {
        let permissions = &self.permissions;

        if permissions.blacklisted {
            return Err(Error::Blacklisted);
        }

        if read_protocol_state(self.env).emergency_mode
            && !has_permission(self.env, self.account, &Permission::EmergencyOperator)
        {
            return Err(Error::EmergencyMode);
        }

        let config = read_action_config(self.env, action);

        if config.whitelist_required && !permissions.whitelisted {
            return Err(Error::ActionNotAllowed);
        }

        if let Some(allowed) = permissions.overrides.get(action) {
            return if allowed {
                Ok(())
            } else {
                Err(Error::ActionNotAllowed)
            };
        }

        if permissions.level < config.min_level {
            return Err(Error::ActionNotAllowed);
        }

        Ok(())
    }
}
