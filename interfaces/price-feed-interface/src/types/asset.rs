use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}
