use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{panic_with_error, vec, Address, Env, String, Vec};

use crate::constants::{BPS_DENOMINATOR, MAX_ALLOCATIONS};
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::accumulator::sub;
use crate::strategy::config::require_active;
use crate::types::{AllocationEntry, AuthorityConfig, Strategy, StrategyInfo};

impl Strategy {
    /// Load a strategy
    ///
    /// ### Panics
    /// If the strategy does not exist
    pub fn load(e: &Env, strategy_id: u32) -> Self {
        storage::get_strategy(e, strategy_id)
            .unwrap_or_else(|| panic_with_error!(e, StrategyError::InvalidStrategy))
    }

    pub fn store(&self, e: &Env) {
        storage::set_strategy(e, self);
    }

    /// Require `caller` to authorize and be the strategy's creator
    pub fn require_creator(&self, e: &Env, caller: &Address) {
        caller.require_auth();
        if *caller != self.creator {
            panic_with_error!(e, StrategyError::Unauthorized);
        }
    }

    pub fn info(&self) -> StrategyInfo {
        StrategyInfo {
            total_value_locked: self.total_value_locked,
            participant_count: self.participant_count,
            cumulative_profit: self.cumulative_profit,
            performance_fee: self.performance_fee,
            pending_rebalance: self.pending_rebalance,
        }
    }
}

/// Split `amount` across `allocations` by weight
///
/// Each portion is floor(amount × weight / 10_000). The division remainder is
/// assigned to the last entry so the portions always sum to `amount`.
pub fn split_by_weight(e: &Env, amount: i128, allocations: &Vec<AllocationEntry>) -> Vec<i128> {
    let mut portions = vec![e];
    let mut remaining = amount;
    let last = allocations.len().saturating_sub(1);
    for (index, entry) in allocations.iter().enumerate() {
        let portion = if index as u32 == last {
            remaining
        } else {
            amount
                .fixed_mul_floor(entry.weight as i128, BPS_DENOMINATOR as i128)
                .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow))
        };
        remaining = sub(e, remaining, portion);
        portions.push_back(portion);
    }
    portions
}

/// Validate an allocation list
///
/// ### Panics
/// - `EmptyAllocation` if the list is empty
/// - `InvalidAllocation` if the weights do not sum to exactly 10_000, a weight is zero,
///   an adapter appears twice, an adapter is not allowed, or the list is too long
pub fn require_valid_allocations(e: &Env, allocations: &Vec<AllocationEntry>) {
    if allocations.is_empty() {
        panic_with_error!(e, StrategyError::EmptyAllocation);
    }
    if allocations.len() > MAX_ALLOCATIONS {
        panic_with_error!(e, StrategyError::InvalidAllocation);
    }

    let mut seen: Vec<Address> = vec![e];
    let mut total_weight: u32 = 0;
    for entry in allocations.iter() {
        if entry.weight == 0 || entry.weight > BPS_DENOMINATOR {
            panic_with_error!(e, StrategyError::InvalidAllocation);
        }
        if seen.contains(&entry.adapter) || !storage::is_adapter_allowed(e, &entry.adapter) {
            panic_with_error!(e, StrategyError::InvalidAllocation);
        }
        seen.push_back(entry.adapter.clone());
        total_weight += entry.weight;
    }

    if total_weight != BPS_DENOMINATOR {
        panic_with_error!(e, StrategyError::InvalidAllocation);
    }
}

pub fn require_valid_fee(e: &Env, config: &AuthorityConfig, performance_fee: u32) {
    if performance_fee > config.max_performance_fee {
        panic_with_error!(e, StrategyError::InvalidFee);
    }
}

pub fn execute_create_strategy(
    e: &Env,
    creator: &Address,
    allocations: &Vec<AllocationEntry>,
    performance_fee: u32,
    metadata: &String,
) -> u32 {
    creator.require_auth();
    require_active(e);

    let config = storage::get_config(e);
    require_valid_fee(e, &config, performance_fee);
    require_valid_allocations(e, allocations);

    let id = storage::bump_strategy_id(e);
    let now = e.ledger().timestamp();
    let strategy = Strategy {
        id,
        creator: creator.clone(),
        allocations: allocations.clone(),
        performance_fee,
        metadata: metadata.clone(),
        total_value_locked: 0,
        participant_count: 0,
        cumulative_profit: 0,
        created_at: now,
        modified_at: now,
        allocation_version: 0,
        pending_rebalance: 0,
    };
    strategy.store(e);

    StrategyEvents::create_strategy(e, creator.clone(), id, allocations.clone(), performance_fee);
    id
}

pub fn execute_update_performance_fee(e: &Env, caller: &Address, strategy_id: u32, performance_fee: u32) {
    let mut strategy = Strategy::load(e, strategy_id);
    strategy.require_creator(e, caller);
    require_valid_fee(e, &storage::get_config(e), performance_fee);

    let old = strategy.performance_fee;
    strategy.performance_fee = performance_fee;
    strategy.store(e);

    StrategyEvents::update_performance_fee(e, strategy_id, old, performance_fee);
}

pub fn execute_update_metadata(e: &Env, caller: &Address, strategy_id: u32, metadata: &String) {
    let mut strategy = Strategy::load(e, strategy_id);
    strategy.require_creator(e, caller);

    let old = strategy.metadata.clone();
    strategy.metadata = metadata.clone();
    strategy.store(e);

    StrategyEvents::update_metadata(e, strategy_id, old, metadata.clone());
}
