use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Configuration
    InvalidConfig = 700,
    ContractPaused = 701,

    // Strategy definition
    InvalidStrategy = 710,
    InvalidAllocation = 711,
    EmptyAllocation = 712,
    InvalidFee = 713,
    Unauthorized = 714,
    RebalancePending = 715,

    // Position
    ZeroAmount = 720,
    NothingToClaim = 721,

    // Adapter boundary
    AdapterStakeFailed = 730,
    AdapterUnstakeFailed = 731,
    AdapterClaimFailed = 732,

    // Math
    ArithmeticOverflow = 740,

    // Oracle/Price
    PriceNotFound = 750,
    PriceStale = 751,
}
