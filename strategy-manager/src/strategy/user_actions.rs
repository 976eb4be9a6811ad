use soroban_sdk::{map, panic_with_error, Address, Env};

use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::accumulator::{add, sub};
use crate::strategy::config::require_active;
use crate::strategy::manager::Manager;
use crate::strategy::rebalance::{apply_deltas, migrate_position};
use crate::strategy::registry::split_by_weight;
use crate::types::{Strategy, UserPosition};

/// Deposit `amount` base tokens into a strategy, routed across its adapters by weight
pub fn execute_deposit(e: &Env, user: &Address, strategy_id: u32, amount: i128) {
    user.require_auth();
    if amount <= 0 {
        panic_with_error!(e, StrategyError::ZeroAmount);
    }
    let mut strategy = Strategy::load(e, strategy_id);
    require_active(e);

    let mut manager = Manager::load(e);
    manager.receive(e, user, amount);

    let existing = UserPosition::load(e, strategy_id, user);
    let is_new = existing.is_none();
    let mut position =
        existing.unwrap_or_else(|| UserPosition::new(e, strategy.allocation_version));

    // a position still on replaced allocations moves before taking new stake
    if position.allocation_version != strategy.allocation_version {
        let mut deltas = map![e];
        migrate_position(e, &mut manager, &strategy, &mut position, &mut deltas);
        apply_deltas(e, &mut manager, strategy_id, &deltas);
        strategy.pending_rebalance -= 1;
    }

    let portions = split_by_weight(e, amount, &strategy.allocations);
    for (entry, portion) in strategy.allocations.iter().zip(portions.iter()) {
        let acc = manager.settle(e, &entry.adapter).acc_reward_per_share;
        position.checkpoint(e, &entry.adapter, acc);
        manager.stake(e, &entry.adapter, portion);

        let amount_at = add(e, position.amount_at(&entry.adapter), portion);
        position.set_amount(e, &entry.adapter, amount_at, acc);
    }

    position.principal = add(e, position.principal, amount);
    strategy.total_value_locked = add(e, strategy.total_value_locked, amount);
    if is_new {
        strategy.participant_count += 1;
        storage::add_participant(e, strategy_id, user);
    }

    position.store(e, strategy_id, user);
    strategy.store(e);
    manager.store_cached_adapters(e);

    StrategyEvents::deposit(e, user.clone(), strategy_id, amount);
}

/// Exit a strategy: unstake every share, pay principal plus net reward, and close the position
///
/// Returns the amount paid to the user
pub fn execute_withdraw(e: &Env, user: &Address, strategy_id: u32) -> i128 {
    user.require_auth();
    let mut strategy = Strategy::load(e, strategy_id);
    let mut position = UserPosition::load(e, strategy_id, user)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::Unauthorized));

    let mut manager = Manager::load(e);
    let mut payout: i128 = 0;
    for (adapter, share) in position.shares.clone().iter() {
        if share.amount == 0 {
            continue;
        }
        let acc = manager.settle(e, &adapter).acc_reward_per_share;
        position.checkpoint(e, &adapter, acc);
        payout = add(e, payout, manager.unstake(e, &adapter, share.amount));
    }

    let gross = position.take_unclaimed();
    let split = manager.distribute_fee(e, &strategy, gross);
    let amount_paid = add(e, payout, split.net);
    manager.transfer(e, user, amount_paid);

    UserPosition::remove(e, strategy_id, user);
    storage::remove_participant(e, strategy_id, user);
    strategy.participant_count -= 1;
    if position.allocation_version != strategy.allocation_version {
        strategy.pending_rebalance -= 1;
    }
    strategy.total_value_locked = sub(e, strategy.total_value_locked, position.principal);
    strategy.cumulative_profit = add(e, strategy.cumulative_profit, gross);
    strategy.store(e);
    manager.store_cached_adapters(e);

    StrategyEvents::withdraw(
        e,
        user.clone(),
        strategy_id,
        position.principal,
        payout,
        split.net,
        split.fee,
    );
    amount_paid
}

/// Realize the reward on every share, leaving principal staked
///
/// Returns the net reward paid to the user
pub fn execute_claim(e: &Env, user: &Address, strategy_id: u32) -> i128 {
    user.require_auth();
    let mut strategy = Strategy::load(e, strategy_id);
    let mut position = UserPosition::load(e, strategy_id, user)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::Unauthorized));

    let mut manager = Manager::load(e);
    for adapter in position.shares.keys().iter() {
        let acc = manager.settle(e, &adapter).acc_reward_per_share;
        position.checkpoint(e, &adapter, acc);
    }

    let gross = position.take_unclaimed();
    if gross == 0 {
        panic_with_error!(e, StrategyError::NothingToClaim);
    }
    let split = manager.distribute_fee(e, &strategy, gross);
    manager.transfer(e, user, split.net);

    strategy.cumulative_profit = add(e, strategy.cumulative_profit, gross);
    position.store(e, strategy_id, user);
    strategy.store(e);
    manager.store_cached_adapters(e);

    StrategyEvents::claim(e, user.clone(), strategy_id, split.net, split.fee);
    split.net
}
