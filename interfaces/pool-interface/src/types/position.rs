use soroban_sdk::contracttype;

/// Balances of one account in one asset, asset native decimals
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub collateral: i128,
    pub debt: i128,
}
