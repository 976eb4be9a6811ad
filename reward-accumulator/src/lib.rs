#![cfg_attr(not(test), no_std)]

//! Reward-per-share accumulator math.
//!
//! A staking pool tracks a single running value, `acc_reward_per_share`, equal to
//! the total reward ever distributed per unit of stake, scaled by [`SCALAR_12`].
//! Each staker stores a reward debt: the portion of the accumulator already
//! accounted for at their last checkpoint. The reward earned since that
//! checkpoint is `amount * acc / SCALAR_12 - debt`.
//!
//! Rewards must be accrued before the pool's total stake changes, otherwise
//! the new reward is divided over the wrong denominator.
//!
//! All functions are pure and return `None` on overflow so callers can raise
//! their own error type.

use soroban_fixed_point_math::FixedPoint;

/// Fixed-point scale of the accumulator (12 decimals)
pub const SCALAR_12: i128 = 1_000_000_000_000;

/// Accrue `reward` into the accumulator over `total_staked` units of stake
///
/// Returns the accumulator unchanged when nothing is staked or the reward is
/// not positive. The increment is floored, the dust is never distributed.
///
/// ### Arguments
/// * `acc_reward_per_share` - The current accumulator value
/// * `reward` - Reward received since the last accrual
/// * `total_staked` - Total stake the reward is distributed over
pub fn accrue(acc_reward_per_share: i128, reward: i128, total_staked: i128) -> Option<i128> {
    if total_staked <= 0 || reward <= 0 {
        return Some(acc_reward_per_share);
    }
    let increment = reward.fixed_mul_floor(SCALAR_12, total_staked)?;
    acc_reward_per_share.checked_add(increment)
}

/// The reward debt of `amount` units of stake at accumulator value `acc_reward_per_share`
pub fn reward_debt(amount: i128, acc_reward_per_share: i128) -> Option<i128> {
    if amount == 0 || acc_reward_per_share == 0 {
        return Some(0);
    }
    amount.fixed_mul_floor(acc_reward_per_share, SCALAR_12)
}

/// Reward earned by `amount` units of stake since the checkpoint that produced `reward_debt`
///
/// Clamped at zero to absorb fixed-point rounding.
pub fn pending(amount: i128, reward_debt_: i128, acc_reward_per_share: i128) -> Option<i128> {
    let accumulated = reward_debt(amount, acc_reward_per_share)?;
    let pending = accumulated.checked_sub(reward_debt_)?;
    Some(pending.max(0))
}
