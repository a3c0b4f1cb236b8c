use pool_interface::types::error::Error;
use pool_interface::types::permission::Permission;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_protocol_state, write_protocol_state};

use super::utils::validation::require_permission;

/// Entering and leaving emergency mode both need the emergency operator
pub fn set_emergency_mode(env: &Env, who: &Address, value: bool) -> Result<(), Error> {
    require_permission(env, who, &Permission::EmergencyOperator)?;

    let mut state = read_protocol_state(env);
    state.emergency_mode = value;
    write_protocol_state(env, &state);

    event::protocol_state(env, &read_protocol_state(env));

    Ok(())
}
