use pool_interface::types::action::Action;
use pool_interface::types::error::Error;
use soroban_sdk::{Address, BytesN, Env};

use crate::types::cross_chain_messenger::CrossChainMessenger;
use crate::types::non_reentrant::NonReentrant;

use super::utils::user_action::require_user_action;
use super::utils::validation::{require_not_paused, require_positive_amount};

/// Burns synthetic debt of `account` from `who` and notifies the chain holding the debt
pub fn repay_cross_chain(
    env: &Env,
    who: &Address,
    account: &Address,
    asset: &Address,
    amount: i128,
    destination_chain: u64,
) -> Result<BytesN<32>, Error> {
    who.require_auth();

    let _guard = NonReentrant::enter(env)?;

    require_not_paused(env)?;
    require_positive_amount(amount)?;

    require_user_action(env, who, Action::CrossChainRepay)?;

    CrossChainMessenger::new(env)?.repay(who, account, asset, amount, destination_chain)
}
