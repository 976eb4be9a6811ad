use soroban_sdk::{Address, Env, Symbol};

pub struct AdapterEvents {}

impl AdapterEvents {
    /// Emitted when tokens are staked
    ///
    /// - topics - `["stake"]`
    /// - data - `[staker: Address, amount: i128]`
    pub fn stake(e: &Env, staker: Address, amount: i128) {
        let topics = (Symbol::new(e, "stake"),);
        e.events().publish(topics, (staker, amount));
    }

    /// Emitted when tokens are unstaked
    ///
    /// - topics - `["unstake"]`
    /// - data - `[staker: Address, amount: i128]`
    pub fn unstake(e: &Env, staker: Address, amount: i128) {
        let topics = (Symbol::new(e, "unstake"),);
        e.events().publish(topics, (staker, amount));
    }

    /// Emitted when a staker claims its reward
    ///
    /// - topics - `["claim"]`
    /// - data - `[staker: Address, reward: i128]`
    pub fn claim(e: &Env, staker: Address, reward: i128) {
        let topics = (Symbol::new(e, "claim"),);
        e.events().publish(topics, (staker, reward));
    }

    /// Emitted when reward tokens are added for current stakers
    ///
    /// - topics - `["fund_rewards"]`
    /// - data - `[funder: Address, amount: i128, acc_reward_per_share: i128]`
    ///
    /// ### Arguments
    /// * funder - The address providing the reward
    /// * amount - Reward tokens added
    /// * acc_reward_per_share - The accumulator after the reward is accrued
    pub fn fund_rewards(e: &Env, funder: Address, amount: i128, acc_reward_per_share: i128) {
        let topics = (Symbol::new(e, "fund_rewards"),);
        e.events().publish(topics, (funder, amount, acc_reward_per_share));
    }

    /// Emitted when the adapter is paused or unpaused
    ///
    /// - topics - `["set_paused"]`
    /// - data - `paused: bool`
    pub fn set_paused(e: &Env, paused: bool) {
        let topics = (Symbol::new(e, "set_paused"),);
        e.events().publish(topics, paused);
    }
}
