use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,
    EmergencyMode = 3,
    NotAuthorized = 4,
    Reentrancy = 5,
    Blacklisted = 6,
    ActionNotAllowed = 7,

    AssetNotSupported = 100,
    AssetNotActive = 101,
    AssetsMaxCapacityExceeded = 102,
    CollateralNotEnabled = 103,
    BorrowingNotEnabled = 104,
    SyntheticNotConfigured = 105,
    NoPriceFeed = 110,
    StalePrice = 112,

    InsufficientCollateral = 200,
    NotEnoughCollateral = 201,
    HealthFactorTooLow = 202,
    DepositCapExceeded = 203,
    BorrowCapExceeded = 204,
    DailyLimitExceeded = 205,

    InvalidAmount = 300,
    PositionHealthy = 301,
    ExceedsCloseFactor = 302,
    LiquidationNotActive = 303,
    NoDebtToLiquidate = 304,
    UnknownLiquidationRequest = 305,
    LiquidationRequestExecuted = 306,
    NotAssignedLiquidator = 307,
    AwaitingRandomness = 308,
    TransferFailed = 309,
    RandomnessNotConfigured = 310,
    LiquidationRequestExpired = 311,

    MathOverflowError = 400,
    MustBeLtePercentageFactor = 401,
    MustBePositive = 402,
    InvalidConfig = 403,
    UserConfigInvalidIndex = 404,

    RateLimited = 500,

    ChainNotSupported = 600,
    MessageFailed = 601,
    MessageAlreadyProcessed = 602,
    InvalidMessage = 603,
}
