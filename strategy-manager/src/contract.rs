use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, Env, String, Vec,
};

use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::types::{
    AdapterPosition, AllocationEntry, AuthorityConfig, Strategy, StrategyInfo, UserPosition,
};
use crate::{storage, strategy};

#[contract]
pub struct StrategyManagerContract;

#[contractclient(name = "StrategyManagerClient")]
pub trait StrategyManager {
    /// (Admin only) Set a new address to become the admin of the manager. This
    /// must be accepted by the new admin w/ `accept_admin` to take effect.
    ///
    /// ### Arguments
    /// * `new_admin` - The new admin address
    ///
    /// ### Panics
    /// If the caller is not the admin
    fn propose_admin(e: Env, new_admin: Address);

    /// (Proposed admin only) Accept the admin role
    ///
    /// ### Panics
    /// If there is no proposed admin or the caller is not the proposed admin
    fn accept_admin(e: Env);

    /// (Admin only) Replace the authority configuration
    ///
    /// ### Arguments
    /// * `config` - The new treasury, oracle, fee cap and creator fee share
    ///
    /// ### Panics
    /// - If the caller is not the admin
    /// - `InvalidConfig` if the fee cap exceeds 50% or the creator share exceeds 100%
    fn set_config(e: Env, config: AuthorityConfig);

    /// (Admin only) Allow or disallow an adapter for new allocations
    ///
    /// Strategies already routing to a disallowed adapter keep working.
    ///
    /// ### Arguments
    /// * `adapter` - The adapter contract
    /// * `allowed` - Whether strategies may reference the adapter
    fn set_adapter(e: Env, adapter: Address, allowed: bool);

    /// (Admin only) Set the manager status
    ///
    /// ### Arguments
    /// * `status` - 0 Active, 1 Frozen. Frozen blocks deposits, strategy creation
    ///   and allocation updates. Withdraw and claim remain available.
    ///
    /// ### Panics
    /// `InvalidConfig` for any other status
    fn set_status(e: Env, status: u32);

    /// Create a strategy owned by `creator`
    ///
    /// Returns the new strategy ID
    ///
    /// ### Arguments
    /// * `creator` - The strategy creator, receives the creator share of performance fees
    /// * `allocations` - Adapters and weights in basis points, summing to 10_000
    /// * `performance_fee` - Fee on realized reward in basis points
    /// * `metadata` - Token URI describing the strategy
    ///
    /// ### Panics
    /// - `EmptyAllocation` / `InvalidAllocation` for a malformed allocation list
    /// - `InvalidFee` if the fee exceeds the configured cap
    /// - `ContractPaused` while frozen
    fn create_strategy(
        e: Env,
        creator: Address,
        allocations: Vec<AllocationEntry>,
        performance_fee: u32,
        metadata: String,
    ) -> u32;

    /// (Creator only) Replace a strategy's allocations
    ///
    /// Existing participants stay on the old allocations until moved by `rebalance`
    /// or by their next deposit.
    ///
    /// ### Arguments
    /// * `caller` - The strategy creator
    /// * `strategy_id` - The strategy to update
    /// * `allocations` - The new allocation list
    ///
    /// ### Panics
    /// - `Unauthorized` if the caller is not the creator
    /// - `RebalancePending` if the previous allocation change has not been fully rebalanced
    fn update_allocations(e: Env, caller: Address, strategy_id: u32, allocations: Vec<AllocationEntry>);

    /// Move a batch of participants onto the strategy's current allocations
    ///
    /// Callable by anyone. Returns the number of participants still pending.
    ///
    /// ### Arguments
    /// * `strategy_id` - The strategy to rebalance
    /// * `start` - Index into the participant list to start from
    /// * `count` - Participants to visit, capped at `MAX_REBALANCE_BATCH`
    ///
    /// ### Panics
    /// - `ContractPaused` while frozen
    /// - `AdapterUnstakeFailed` if adapters release less than is re-staked
    fn rebalance(e: Env, strategy_id: u32, start: u32, count: u32) -> u32;

    /// (Creator only) Change a strategy's performance fee
    fn update_performance_fee(e: Env, caller: Address, strategy_id: u32, performance_fee: u32);

    /// (Creator only) Change a strategy's metadata
    fn update_metadata(e: Env, caller: Address, strategy_id: u32, metadata: String);

    /// Deposit base tokens into a strategy
    ///
    /// ### Arguments
    /// * `user` - The depositor
    /// * `strategy_id` - The strategy to deposit into
    /// * `amount` - Base tokens to deposit, split across the strategy's adapters
    ///
    /// ### Panics
    /// - `ZeroAmount` if the amount is not positive
    /// - `InvalidStrategy` if the strategy does not exist
    /// - `AdapterStakeFailed` if an adapter rejects its portion
    fn deposit(e: Env, user: Address, strategy_id: u32, amount: i128);

    /// Withdraw a user's whole position and realized reward
    ///
    /// Returns the amount paid to the user: the adapters' payout plus the reward net of fees
    ///
    /// ### Panics
    /// - `Unauthorized` if the user has no position
    /// - `AdapterUnstakeFailed` if an adapter fails to release the stake
    fn withdraw(e: Env, user: Address, strategy_id: u32) -> i128;

    /// Claim a user's reward, leaving the principal invested
    ///
    /// Returns the reward paid to the user, net of fees
    ///
    /// ### Panics
    /// - `NothingToClaim` if no reward has accrued
    /// - `AdapterClaimFailed` if an adapter fails to pay out its reward
    fn claim(e: Env, user: Address, strategy_id: u32) -> i128;

    /// Reward `user` would realize by claiming now, before the performance fee
    fn pending_reward(e: Env, strategy_id: u32, user: Address) -> i128;

    /// Fetch a strategy's aggregate figures
    fn strategy_info(e: Env, strategy_id: u32) -> StrategyInfo;

    /// Value of a strategy's locked principal in the oracle's base currency
    ///
    /// ### Panics
    /// - `PriceNotFound` if the oracle has no price for the base token
    /// - `PriceStale` if the oracle price is too old
    fn strategy_value(e: Env, strategy_id: u32) -> i128;

    fn get_strategy(e: Env, strategy_id: u32) -> Strategy;

    fn get_position(e: Env, strategy_id: u32, user: Address) -> Option<UserPosition>;

    fn get_adapter_position(e: Env, adapter: Address) -> AdapterPosition;

    fn get_participants(e: Env, strategy_id: u32) -> Vec<Address>;

    fn get_config(e: Env) -> AuthorityConfig;

    fn get_token(e: Env) -> Address;

    fn is_adapter_allowed(e: Env, adapter: Address) -> bool;

    /// Number of strategies created, also the latest strategy ID
    fn strategy_count(e: Env) -> u32;
}

#[contractimpl]
impl StrategyManagerContract {
    /// Constructor for initializing the contract when deployed
    pub fn __constructor(e: Env, admin: Address, token: Address, config: AuthorityConfig) {
        admin.require_auth();
        strategy::execute_initialize(&e, &admin, &token, &config);
    }
}

#[contractimpl]
impl StrategyManager for StrategyManagerContract {
    fn propose_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        storage::set_proposed_admin(&e, &new_admin);
        StrategyEvents::propose_admin(&e, admin, new_admin);
    }

    fn accept_admin(e: Env) {
        storage::extend_instance(&e);
        let proposed_admin = storage::get_proposed_admin(&e)
            .unwrap_or_else(|| panic_with_error!(&e, StrategyError::Unauthorized));
        proposed_admin.require_auth();

        storage::set_admin(&e, &proposed_admin);
        storage::del_proposed_admin(&e);
        StrategyEvents::accept_admin(&e, proposed_admin);
    }

    fn set_config(e: Env, config: AuthorityConfig) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        strategy::execute_set_config(&e, &config);
    }

    fn set_adapter(e: Env, adapter: Address, allowed: bool) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        strategy::execute_set_adapter(&e, &adapter, allowed);
    }

    fn set_status(e: Env, status: u32) {
        storage::extend_instance(&e);
        storage::get_admin(&e).require_auth();

        strategy::execute_set_status(&e, status);
    }

    fn create_strategy(
        e: Env,
        creator: Address,
        allocations: Vec<AllocationEntry>,
        performance_fee: u32,
        metadata: String,
    ) -> u32 {
        storage::extend_instance(&e);
        strategy::execute_create_strategy(&e, &creator, &allocations, performance_fee, &metadata)
    }

    fn update_allocations(e: Env, caller: Address, strategy_id: u32, allocations: Vec<AllocationEntry>) {
        storage::extend_instance(&e);
        strategy::execute_update_allocations(&e, &caller, strategy_id, &allocations);
    }

    fn rebalance(e: Env, strategy_id: u32, start: u32, count: u32) -> u32 {
        storage::extend_instance(&e);
        strategy::execute_rebalance(&e, strategy_id, start, count)
    }

    fn update_performance_fee(e: Env, caller: Address, strategy_id: u32, performance_fee: u32) {
        storage::extend_instance(&e);
        strategy::execute_update_performance_fee(&e, &caller, strategy_id, performance_fee);
    }

    fn update_metadata(e: Env, caller: Address, strategy_id: u32, metadata: String) {
        storage::extend_instance(&e);
        strategy::execute_update_metadata(&e, &caller, strategy_id, &metadata);
    }

    fn deposit(e: Env, user: Address, strategy_id: u32, amount: i128) {
        storage::extend_instance(&e);
        strategy::execute_deposit(&e, &user, strategy_id, amount);
    }

    fn withdraw(e: Env, user: Address, strategy_id: u32) -> i128 {
        storage::extend_instance(&e);
        strategy::execute_withdraw(&e, &user, strategy_id)
    }

    fn claim(e: Env, user: Address, strategy_id: u32) -> i128 {
        storage::extend_instance(&e);
        strategy::execute_claim(&e, &user, strategy_id)
    }

    fn pending_reward(e: Env, strategy_id: u32, user: Address) -> i128 {
        strategy::execute_pending_reward(&e, strategy_id, &user)
    }

    fn strategy_info(e: Env, strategy_id: u32) -> StrategyInfo {
        Strategy::load(&e, strategy_id).info()
    }

    fn strategy_value(e: Env, strategy_id: u32) -> i128 {
        strategy::execute_strategy_value(&e, strategy_id)
    }

    fn get_strategy(e: Env, strategy_id: u32) -> Strategy {
        Strategy::load(&e, strategy_id)
    }

    fn get_position(e: Env, strategy_id: u32, user: Address) -> Option<UserPosition> {
        storage::get_position(&e, strategy_id, &user)
    }

    fn get_adapter_position(e: Env, adapter: Address) -> AdapterPosition {
        storage::get_adapter_position(&e, &adapter)
    }

    fn get_participants(e: Env, strategy_id: u32) -> Vec<Address> {
        storage::get_participants(&e, strategy_id)
    }

    fn get_config(e: Env) -> AuthorityConfig {
        storage::get_config(&e)
    }

    fn get_token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn is_adapter_allowed(e: Env, adapter: Address) -> bool {
        storage::is_adapter_allowed(&e, &adapter)
    }

    fn strategy_count(e: Env) -> u32 {
        storage::get_strategy_counter(&e)
    }
}
