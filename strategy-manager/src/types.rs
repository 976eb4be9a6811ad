use soroban_sdk::{contracttype, Address, Map, String, Vec};

/// Protocol-wide authority settings, owned by the admin
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorityConfig {
    pub treasury: Address,        // Receives the protocol share of performance fees
    pub oracle: Address,          // SEP-40 price feed used for informational valuation
    pub max_performance_fee: u32, // Cap for a strategy's performance fee (bps)
    pub creator_fee_share: u32,   // Share of the performance fee paid to the strategy creator (bps)
}

/// One leg of a strategy: an adapter and the share of each deposit routed to it
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationEntry {
    pub adapter: Address, // Adapter contract
    pub weight: u32,      // Weight in basis points
}

/// A weighted bundle of adapters users deposit into as a unit
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Strategy {
    pub id: u32,
    pub creator: Address,
    pub allocations: Vec<AllocationEntry>,
    pub performance_fee: u32,      // Fee on realized reward (bps)
    pub metadata: String,          // Token URI describing the strategy
    pub total_value_locked: i128,  // Sum of participant principal
    pub participant_count: u32,    // Users with an active position
    pub cumulative_profit: i128,   // Gross reward realized by participants
    pub created_at: u64,
    pub modified_at: u64,          // Last allocation change
    pub allocation_version: u32,   // Bumped on every allocation change
    pub pending_rebalance: u32,    // Participants not yet moved to the current allocations
}

/// Aggregate strategy figures
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyInfo {
    pub total_value_locked: i128,
    pub participant_count: u32,
    pub cumulative_profit: i128,
    pub performance_fee: u32,
    pub pending_rebalance: u32,
}

/// The manager's stake in one adapter, shared by every strategy routing to it
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdapterPosition {
    pub adapter: Address,
    pub total_staked: i128,         // Sum of user amounts routed to the adapter
    pub acc_reward_per_share: i128, // Reward per unit of stake (SCALAR_12)
    pub last_settlement: u64,       // Timestamp of the last settlement
    pub total_harvested: i128,      // Lifetime reward claimed from the adapter
}

/// A user's stake at a single adapter
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdapterShare {
    pub amount: i128,      // Principal routed to the adapter
    pub reward_debt: i128, // amount * acc_reward_per_share at the last checkpoint
}

/// A user's position in a strategy
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserPosition {
    pub principal: i128,                     // Total deposited, equal to the sum of share amounts
    pub unclaimed: i128,                     // Settled reward not yet paid out (gross of fee)
    pub shares: Map<Address, AdapterShare>,  // Stake per adapter
    pub allocation_version: u32,             // Strategy allocation version the shares follow
}
