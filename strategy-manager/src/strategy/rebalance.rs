use soroban_sdk::{map, panic_with_error, Address, Env, Map, Vec};

use crate::constants::MAX_REBALANCE_BATCH;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::accumulator::{add, sub};
use crate::strategy::config::require_active;
use crate::strategy::manager::Manager;
use crate::strategy::registry::{require_valid_allocations, split_by_weight};
use crate::types::{AllocationEntry, Strategy, UserPosition};

/// Replace a strategy's allocations
///
/// No stake moves here. Every current participant is marked as pending and is
/// moved to the new weights by `execute_rebalance` batches, or by their next deposit.
///
/// ### Panics
/// `RebalancePending` if participants of the previous allocation change have not all been moved
pub fn execute_update_allocations(
    e: &Env,
    caller: &Address,
    strategy_id: u32,
    allocations: &Vec<AllocationEntry>,
) {
    let mut strategy = Strategy::load(e, strategy_id);
    strategy.require_creator(e, caller);
    require_active(e);
    require_valid_allocations(e, allocations);
    if strategy.pending_rebalance > 0 {
        panic_with_error!(e, StrategyError::RebalancePending);
    }

    let old = strategy.allocations.clone();
    strategy.allocations = allocations.clone();
    strategy.allocation_version += 1;
    strategy.pending_rebalance = strategy.participant_count;
    strategy.modified_at = e.ledger().timestamp();
    strategy.store(e);

    StrategyEvents::update_allocations(e, strategy_id, old, allocations.clone());
}

/// Move up to `count` participants, starting at index `start` of the participant list,
/// onto the strategy's current allocations
///
/// Participants already on the current allocations are skipped. Stake moves are
/// netted per adapter over the batch.
///
/// Returns the number of participants still pending
pub fn execute_rebalance(e: &Env, strategy_id: u32, start: u32, count: u32) -> u32 {
    let mut strategy = Strategy::load(e, strategy_id);
    require_active(e);
    if strategy.pending_rebalance == 0 {
        return 0;
    }

    let participants = storage::get_participants(e, strategy_id);
    let end = start
        .saturating_add(count.min(MAX_REBALANCE_BATCH))
        .min(participants.len());

    let mut manager = Manager::load(e);
    let mut deltas: Map<Address, i128> = map![e];
    let mut moved: u32 = 0;
    for index in start..end {
        let user = participants.get_unchecked(index);
        let Some(mut position) = UserPosition::load(e, strategy_id, &user) else {
            continue;
        };
        if position.allocation_version == strategy.allocation_version {
            continue;
        }
        migrate_position(e, &mut manager, &strategy, &mut position, &mut deltas);
        position.store(e, strategy_id, &user);
        moved += 1;
    }
    apply_deltas(e, &mut manager, strategy_id, &deltas);

    strategy.pending_rebalance -= moved;
    strategy.store(e);
    manager.store_cached_adapters(e);

    StrategyEvents::rebalance(e, strategy_id, moved, strategy.pending_rebalance);
    strategy.pending_rebalance
}

/// Move a position's principal onto the strategy's current allocations
///
/// Reward accrued on the old shares is credited to `unclaimed` first. The stake
/// change per adapter is recorded in `deltas` and must be applied with `apply_deltas`.
pub(crate) fn migrate_position(
    e: &Env,
    manager: &mut Manager,
    strategy: &Strategy,
    position: &mut UserPosition,
    deltas: &mut Map<Address, i128>,
) {
    for (adapter, share) in position.shares.clone().iter() {
        let acc = manager.settle(e, &adapter).acc_reward_per_share;
        position.checkpoint(e, &adapter, acc);
        record_delta(e, deltas, &adapter, -share.amount);
    }

    position.shares = map![e];
    let targets = split_by_weight(e, position.principal, &strategy.allocations);
    for (entry, target) in strategy.allocations.iter().zip(targets.iter()) {
        let acc = manager.settle(e, &entry.adapter).acc_reward_per_share;
        position.set_amount(e, &entry.adapter, target, acc);
        record_delta(e, deltas, &entry.adapter, target);
    }
    position.allocation_version = strategy.allocation_version;
}

/// Unstake every negative delta, then stake every positive one
///
/// ### Panics
/// `AdapterUnstakeFailed` if adapters release less than is re-staked
pub(crate) fn apply_deltas(
    e: &Env,
    manager: &mut Manager,
    strategy_id: u32,
    deltas: &Map<Address, i128>,
) {
    let mut released: i128 = 0;
    for (adapter, delta) in deltas.iter() {
        if delta < 0 {
            released = add(e, released, manager.unstake(e, &adapter, -delta));
        }
    }
    let mut restaked: i128 = 0;
    for (adapter, delta) in deltas.iter() {
        if delta > 0 {
            manager.stake(e, &adapter, delta);
            restaked = add(e, restaked, delta);
        }
    }

    // released capital must cover re-staked capital, the rest of the balance is unpaid reward
    if released < restaked {
        panic_with_error!(e, StrategyError::AdapterUnstakeFailed);
    }
    let surplus = sub(e, released, restaked);
    if surplus > 0 {
        manager.transfer(e, &manager.config.treasury, surplus);
        StrategyEvents::rebalance_surplus(e, strategy_id, surplus);
    }
}

fn record_delta(e: &Env, deltas: &mut Map<Address, i128>, adapter: &Address, delta: i128) {
    let current = deltas.get(adapter.clone()).unwrap_or(0);
    deltas.set(adapter.clone(), add(e, current, delta));
}
