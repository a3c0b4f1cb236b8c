use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_protocol_state, write_protocol_state};

use super::utils::validation::require_permission;

pub fn set_pause(env: &Env, who: &Address, value: bool) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetPause)?;

    let mut state = read_protocol_state(env);
    state.paused = value;
    write_protocol_state(env, &state);

    event::protocol_state(env, &read_protocol_state(env));

    Ok(())
}
