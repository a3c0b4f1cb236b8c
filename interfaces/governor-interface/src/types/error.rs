use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    NotSigner = 2,
    InvalidThreshold = 3,
    DuplicateSigner = 4,

    OperationExists = 100,
    UnknownOperation = 101,
    AlreadyApproved = 102,
    InsufficientApprovals = 103,
    TimeLockNotReady = 104,
    AlreadyExecuted = 105,
    OperationCancelled = 106,
}
