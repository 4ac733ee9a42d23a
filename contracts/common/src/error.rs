use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    CallerMustBePool = 100,

    InvalidMintAmount = 200,
    InvalidBurnAmount = 201,
    InsufficientDebt = 202,
    InvalidRate = 203,
    InsufficientBorrowAllowance = 204,
    NegativeAmount = 205,

    NoReserve = 300,
    IndexDecreased = 301,
    InvalidReserveFactor = 302,

    ArithmeticOverflow = 400,
    DivisionByZero = 401,

    TransferNotSupported = 500,
    ApprovalNotSupported = 501,
    AllowanceNotSupported = 502,
}
