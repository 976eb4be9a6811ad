use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AdapterError {
    // Amount validation errors
    ZeroAmount = 800,
    InsufficientStake = 801,

    // Adapter state errors
    AdapterPaused = 810,
    NoStakers = 811,

    // Math errors
    ArithmeticOverflow = 820,
}
