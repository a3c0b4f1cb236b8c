use soroban_sdk::contracttype;

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub enum TimestampPrecision {
    Milli,
    Seconds,
}
