use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PermissionLevel {
    None = 0,
    User = 1,
    Trusted = 2,
    Operator = 3,
    Admin = 4,
}
