use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub enabled: bool,
}
