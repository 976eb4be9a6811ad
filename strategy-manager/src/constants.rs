// Basis points
pub const BPS_DENOMINATOR: u32 = 10_000; // 100%
pub const MAX_PERFORMANCE_FEE_CEILING: u32 = 5_000; // 50%, upper bound for the configurable fee cap

// Manager status
pub const STATUS_ACTIVE: u32 = 0;
pub const STATUS_FROZEN: u32 = 1; // Deposits, new strategies and rebalances blocked

// Oracle
pub const MAX_PRICE_AGE: u64 = 300; // Max price age in seconds (5 minutes)

// Limits
pub const MAX_ALLOCATIONS: u32 = 10; // Max adapters a strategy can route to
pub const MAX_REBALANCE_BATCH: u32 = 20; // Max participants moved by one rebalance call
