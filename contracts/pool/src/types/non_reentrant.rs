use pool_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{is_locked, write_locked};

/// Holds the pool lock for the lifetime of the guard
pub struct NonReentrant<'a> {
    env: &'a Env,
}

impl<'a> NonReentrant<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::Reentrancy);
        }

        write_locked(env, true);

        Ok(Self { env })
    }
}

impl Drop for NonReentrant<'_> {
    fn drop(&mut self) {
        write_locked(self.env, false);
    }
}
