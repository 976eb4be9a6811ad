use soroban_sdk::{Address, Env, String, Symbol, Vec};

use crate::types::{AllocationEntry, AuthorityConfig};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when an admin is proposed
    ///
    /// - topics - `["propose_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn propose_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "propose_admin"), admin);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when the proposed admin accepts the role
    ///
    /// - topics - `["accept_admin"]`
    /// - data - `new_admin: Address`
    pub fn accept_admin(e: &Env, new_admin: Address) {
        let topics = (Symbol::new(e, "accept_admin"),);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when the authority configuration is updated
    ///
    /// - topics - `["set_config"]`
    /// - data - `[old: AuthorityConfig, new: AuthorityConfig]`
    pub fn set_config(e: &Env, old: AuthorityConfig, new: AuthorityConfig) {
        let topics = (Symbol::new(e, "set_config"),);
        e.events().publish(topics, (old, new));
    }

    /// Emitted when an adapter is added to or removed from the allow-list
    ///
    /// - topics - `["set_adapter", adapter: Address]`
    /// - data - `allowed: bool`
    pub fn set_adapter(e: &Env, adapter: Address, allowed: bool) {
        let topics = (Symbol::new(e, "set_adapter"), adapter);
        e.events().publish(topics, allowed);
    }

    /// Emitted when the manager status changes
    ///
    /// - topics - `["set_status"]`
    /// - data - `status: u32`
    pub fn set_status(e: &Env, status: u32) {
        let topics = (Symbol::new(e, "set_status"),);
        e.events().publish(topics, status);
    }

    /// Emitted when a strategy is created
    ///
    /// - topics - `["create_strategy", creator: Address]`
    /// - data - `[strategy_id: u32, allocations: Vec<AllocationEntry>, performance_fee: u32]`
    pub fn create_strategy(
        e: &Env,
        creator: Address,
        strategy_id: u32,
        allocations: Vec<AllocationEntry>,
        performance_fee: u32,
    ) {
        let topics = (Symbol::new(e, "create_strategy"), creator);
        e.events()
            .publish(topics, (strategy_id, allocations, performance_fee));
    }

    /// Emitted when a strategy's allocations change
    ///
    /// - topics - `["update_allocations", strategy_id: u32]`
    /// - data - `[old: Vec<AllocationEntry>, new: Vec<AllocationEntry>]`
    pub fn update_allocations(
        e: &Env,
        strategy_id: u32,
        old: Vec<AllocationEntry>,
        new: Vec<AllocationEntry>,
    ) {
        let topics = (Symbol::new(e, "update_allocations"), strategy_id);
        e.events().publish(topics, (old, new));
    }

    /// Emitted when a strategy's performance fee changes
    ///
    /// - topics - `["update_performance_fee", strategy_id: u32]`
    /// - data - `[old: u32, new: u32]`
    pub fn update_performance_fee(e: &Env, strategy_id: u32, old: u32, new: u32) {
        let topics = (Symbol::new(e, "update_performance_fee"), strategy_id);
        e.events().publish(topics, (old, new));
    }

    /// Emitted when a strategy's metadata changes
    ///
    /// - topics - `["update_metadata", strategy_id: u32]`
    /// - data - `[old: String, new: String]`
    pub fn update_metadata(e: &Env, strategy_id: u32, old: String, new: String) {
        let topics = (Symbol::new(e, "update_metadata"), strategy_id);
        e.events().publish(topics, (old, new));
    }

    /// Emitted when a user deposits into a strategy
    ///
    /// - topics - `["deposit", strategy_id: u32, user: Address]`
    /// - data - `amount: i128`
    pub fn deposit(e: &Env, user: Address, strategy_id: u32, amount: i128) {
        let topics = (Symbol::new(e, "deposit"), strategy_id, user);
        e.events().publish(topics, amount);
    }

    /// Emitted when a user exits a strategy
    ///
    /// - topics - `["withdraw", strategy_id: u32, user: Address]`
    /// - data - `[principal: i128, payout: i128, reward: i128, fee: i128]`
    ///
    /// ### Arguments
    /// * principal - The principal the user had accounted
    /// * payout - Principal returned by the adapters
    /// * reward - Net reward paid to the user
    /// * fee - Performance fee taken from the reward
    pub fn withdraw(
        e: &Env,
        user: Address,
        strategy_id: u32,
        principal: i128,
        payout: i128,
        reward: i128,
        fee: i128,
    ) {
        let topics = (Symbol::new(e, "withdraw"), strategy_id, user);
        e.events().publish(topics, (principal, payout, reward, fee));
    }

    /// Emitted when a user claims rewards
    ///
    /// - topics - `["claim", strategy_id: u32, user: Address]`
    /// - data - `[reward: i128, fee: i128]`
    pub fn claim(e: &Env, user: Address, strategy_id: u32, reward: i128, fee: i128) {
        let topics = (Symbol::new(e, "claim"), strategy_id, user);
        e.events().publish(topics, (reward, fee));
    }

    /// Emitted when reward harvested from an adapter is accrued
    ///
    /// - topics - `["settle", adapter: Address]`
    /// - data - `[harvested: i128, acc_reward_per_share: i128]`
    pub fn settle(e: &Env, adapter: Address, harvested: i128, acc_reward_per_share: i128) {
        let topics = (Symbol::new(e, "settle"), adapter);
        e.events().publish(topics, (harvested, acc_reward_per_share));
    }

    /// Emitted when a batch of participants is moved to a strategy's current allocations
    ///
    /// - topics - `["rebalance", strategy_id: u32]`
    /// - data - `[moved: u32, pending: u32]`
    pub fn rebalance(e: &Env, strategy_id: u32, moved: u32, pending: u32) {
        let topics = (Symbol::new(e, "rebalance"), strategy_id);
        e.events().publish(topics, (moved, pending));
    }

    /// Emitted when adapters return more than the principal moved by a rebalance
    ///
    /// - topics - `["rebalance_surplus", strategy_id: u32]`
    /// - data - `surplus: i128`
    pub fn rebalance_surplus(e: &Env, strategy_id: u32, surplus: i128) {
        let topics = (Symbol::new(e, "rebalance_surplus"), strategy_id);
        e.events().publish(topics, surplus);
    }
}
