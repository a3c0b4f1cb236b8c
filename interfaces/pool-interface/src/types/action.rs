use soroban_sdk::contracttype;

/// User facing operations subject to access checks and rate limits
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
    Borrow,
    Repay,
    CrossChainRepay,
    Liquidate,
}
