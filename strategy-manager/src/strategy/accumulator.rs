use reward_accumulator as math;
use soroban_sdk::{panic_with_error, Env};

use crate::errors::StrategyError;
use crate::types::AdapterPosition;

pub(crate) fn accrue(e: &Env, acc_reward_per_share: i128, reward: i128, total_staked: i128) -> i128 {
    math::accrue(acc_reward_per_share, reward, total_staked)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow))
}

pub(crate) fn reward_debt(e: &Env, amount: i128, acc_reward_per_share: i128) -> i128 {
    math::reward_debt(amount, acc_reward_per_share)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow))
}

pub(crate) fn pending(e: &Env, amount: i128, reward_debt: i128, acc_reward_per_share: i128) -> i128 {
    math::pending(amount, reward_debt, acc_reward_per_share)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow))
}

pub(crate) fn add(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow))
}

pub(crate) fn sub(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_sub(b)
        .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow))
}

impl AdapterPosition {
    /// Distribute `harvested` over the current stake
    ///
    /// Must run before `total_staked` changes.
    pub fn accrue(&mut self, e: &Env, harvested: i128) {
        if harvested <= 0 {
            return;
        }
        self.acc_reward_per_share = accrue(e, self.acc_reward_per_share, harvested, self.total_staked);
        self.total_harvested = add(e, self.total_harvested, harvested);
    }

    pub fn add_stake(&mut self, e: &Env, amount: i128) {
        self.total_staked = add(e, self.total_staked, amount);
    }

    pub fn remove_stake(&mut self, e: &Env, amount: i128) {
        let remaining = sub(e, self.total_staked, amount);
        if remaining < 0 {
            panic_with_error!(e, StrategyError::ArithmeticOverflow);
        }
        self.total_staked = remaining;
    }
}
