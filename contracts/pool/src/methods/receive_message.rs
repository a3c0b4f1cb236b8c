use pool_interface::types::error::Error;
use soroban_sdk::{Bytes, BytesN, Env};

use crate::types::cross_chain_messenger::CrossChainMessenger;
use crate::types::non_reentrant::NonReentrant;

use super::utils::validation::require_not_paused;

pub fn receive_message(env: &Env, message_id: &BytesN<32>, payload: &Bytes) -> Result<(), Error> {
    let _guard = NonReentrant::enter(env)?;

    require_not_paused(env)?;

    CrossChainMessenger::new(env)?.receive(message_id, payload)
}
