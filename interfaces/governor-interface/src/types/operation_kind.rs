use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// Multisig only, executable as soon as the threshold is reached
    Instant,
    Standard,
    Critical,
    Emergency,
}
