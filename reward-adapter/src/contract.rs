use reward_accumulator as math;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, token, Address, Env};

use crate::{
    errors::AdapterError,
    events::AdapterEvents,
    storage::{self, StakerInfo},
};

#[contract]
pub struct RewardAdapterContract;

#[contractclient(name = "RewardAdapterClient")]
pub trait RewardAdapter {
    /// Stakes `amount` tokens for `caller`
    ///
    /// Pulls the tokens from `caller`. Reward accrued on the previous stake is
    /// checkpointed first and stays claimable.
    ///
    /// # Arguments
    /// * `caller` - The staker (must authorize transaction)
    /// * `amount` - Tokens to stake (must be > 0)
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `AdapterPaused` while paused
    fn stake(e: Env, caller: Address, amount: i128);

    /// Unstakes `amount` tokens and pays them to `caller`
    ///
    /// # Returns
    /// Tokens paid out
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `AdapterPaused` while paused
    /// - `InsufficientStake` if amount exceeds the caller's stake
    fn unstake(e: Env, caller: Address, amount: i128) -> i128;

    /// Returns the reward `position` could claim now
    fn pending_reward(e: Env, position: Address) -> i128;

    /// Pays `caller` all of its accrued reward
    ///
    /// Available while paused.
    ///
    /// # Returns
    /// Reward paid, zero if nothing accrued
    fn claim(e: Env, caller: Address) -> i128;

    /// Adds `amount` reward tokens for the current stakers, pro rata to stake
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `NoStakers` if nothing is staked
    fn fund_rewards(e: Env, funder: Address, amount: i128);

    /// (Admin only) Pause or unpause staking and unstaking
    fn set_paused(e: Env, paused: bool);

    /// Returns the tokens staked by `position`
    fn staked(e: Env, position: Address) -> i128;

    /// Returns the tokens staked by every position
    fn total_staked(e: Env) -> i128;

    /// Returns the address of the staked and reward token
    fn token(e: Env) -> Address;
}

#[contractimpl]
impl RewardAdapterContract {
    /// Constructor for initializing the contract when deployed
    pub fn __constructor(e: Env, admin: Address, token: Address) {
        storage::set_admin(&e, &admin);
        storage::set_token(&e, &token);
        storage::set_paused(&e, &false);
        storage::set_total_staked(&e, &0);
        storage::set_acc_reward_per_share(&e, &0);

        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl RewardAdapter for RewardAdapterContract {
    fn stake(e: Env, caller: Address, amount: i128) {
        caller.require_auth();
        require_positive(&e, amount);
        require_not_paused(&e);

        let acc = storage::get_acc_reward_per_share(&e);
        let mut info = storage::get_staker(&e, &caller);
        checkpoint(&e, &mut info, acc);

        token::Client::new(&e, &storage::get_token(&e)).transfer(
            &caller,
            &e.current_contract_address(),
            &amount,
        );

        info.amount = add(&e, info.amount, amount);
        info.reward_debt = reward_debt(&e, info.amount, acc);
        storage::set_staker(&e, &caller, &info);
        storage::set_total_staked(&e, &add(&e, storage::get_total_staked(&e), amount));

        AdapterEvents::stake(&e, caller, amount);
        storage::extend_instance(&e);
    }

    fn unstake(e: Env, caller: Address, amount: i128) -> i128 {
        caller.require_auth();
        require_positive(&e, amount);
        require_not_paused(&e);

        let acc = storage::get_acc_reward_per_share(&e);
        let mut info = storage::get_staker(&e, &caller);
        if amount > info.amount {
            panic_with_error!(e, AdapterError::InsufficientStake);
        }
        checkpoint(&e, &mut info, acc);

        info.amount -= amount;
        info.reward_debt = reward_debt(&e, info.amount, acc);
        storage::set_staker(&e, &caller, &info);
        storage::set_total_staked(&e, &(storage::get_total_staked(&e) - amount));

        token::Client::new(&e, &storage::get_token(&e)).transfer(
            &e.current_contract_address(),
            &caller,
            &amount,
        );

        AdapterEvents::unstake(&e, caller, amount);
        storage::extend_instance(&e);
        amount
    }

    fn pending_reward(e: Env, position: Address) -> i128 {
        let info = storage::get_staker(&e, &position);
        let pending = math::pending(info.amount, info.reward_debt, storage::get_acc_reward_per_share(&e))
            .unwrap_or_else(|| panic_with_error!(e, AdapterError::ArithmeticOverflow));
        add(&e, info.owed, pending)
    }

    fn claim(e: Env, caller: Address) -> i128 {
        caller.require_auth();

        let acc = storage::get_acc_reward_per_share(&e);
        let mut info = storage::get_staker(&e, &caller);
        checkpoint(&e, &mut info, acc);
        info.reward_debt = reward_debt(&e, info.amount, acc);

        let reward = info.owed;
        info.owed = 0;
        storage::set_staker(&e, &caller, &info);

        if reward > 0 {
            token::Client::new(&e, &storage::get_token(&e)).transfer(
                &e.current_contract_address(),
                &caller,
                &reward,
            );
            AdapterEvents::claim(&e, caller, reward);
        }

        storage::extend_instance(&e);
        reward
    }

    fn fund_rewards(e: Env, funder: Address, amount: i128) {
        funder.require_auth();
        require_positive(&e, amount);

        let total_staked = storage::get_total_staked(&e);
        if total_staked <= 0 {
            panic_with_error!(e, AdapterError::NoStakers);
        }

        token::Client::new(&e, &storage::get_token(&e)).transfer(
            &funder,
            &e.current_contract_address(),
            &amount,
        );

        let acc = math::accrue(storage::get_acc_reward_per_share(&e), amount, total_staked)
            .unwrap_or_else(|| panic_with_error!(e, AdapterError::ArithmeticOverflow));
        storage::set_acc_reward_per_share(&e, &acc);

        AdapterEvents::fund_rewards(&e, funder, amount, acc);
        storage::extend_instance(&e);
    }

    fn set_paused(e: Env, paused: bool) {
        storage::get_admin(&e).require_auth();
        storage::set_paused(&e, &paused);

        AdapterEvents::set_paused(&e, paused);
        storage::extend_instance(&e);
    }

    fn staked(e: Env, position: Address) -> i128 {
        storage::get_staker(&e, &position).amount
    }

    fn total_staked(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_staked(&e)
    }

    fn token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }
}

fn require_positive(e: &Env, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, AdapterError::ZeroAmount);
    }
}

fn require_not_paused(e: &Env) {
    if storage::is_paused(e) {
        panic_with_error!(e, AdapterError::AdapterPaused);
    }
}

/// Move the reward accrued on `info.amount` into `info.owed`
fn checkpoint(e: &Env, info: &mut StakerInfo, acc_reward_per_share: i128) {
    let pending = math::pending(info.amount, info.reward_debt, acc_reward_per_share)
        .unwrap_or_else(|| panic_with_error!(e, AdapterError::ArithmeticOverflow));
    info.owed = add(e, info.owed, pending);
}

fn reward_debt(e: &Env, amount: i128, acc_reward_per_share: i128) -> i128 {
    math::reward_debt(amount, acc_reward_per_share)
        .unwrap_or_else(|| panic_with_error!(e, AdapterError::ArithmeticOverflow))
}

fn add(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, AdapterError::ArithmeticOverflow))
}
