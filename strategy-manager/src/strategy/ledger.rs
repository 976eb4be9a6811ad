use soroban_sdk::{map, Address, Env};

use crate::storage;
use crate::strategy::accumulator::{add, pending, reward_debt};
use crate::types::{AdapterShare, UserPosition};

/// Implementation of the per (strategy, user) ledger entry
impl UserPosition {
    pub fn new(e: &Env, allocation_version: u32) -> Self {
        UserPosition {
            principal: 0,
            unclaimed: 0,
            shares: map![e],
            allocation_version,
        }
    }

    pub fn load(e: &Env, strategy_id: u32, user: &Address) -> Option<Self> {
        storage::get_position(e, strategy_id, user)
    }

    pub fn store(&self, e: &Env, strategy_id: u32, user: &Address) {
        storage::set_position(e, strategy_id, user, self);
    }

    pub fn remove(e: &Env, strategy_id: u32, user: &Address) {
        storage::remove_position(e, strategy_id, user);
    }

    /// Principal routed to `adapter`
    pub fn amount_at(&self, adapter: &Address) -> i128 {
        self.shares
            .get(adapter.clone())
            .map(|share| share.amount)
            .unwrap_or(0)
    }

    /// Credit the reward accrued on `adapter` into `unclaimed` and move the
    /// share's checkpoint to `acc_reward_per_share`
    ///
    /// Returns the reward credited
    pub fn checkpoint(&mut self, e: &Env, adapter: &Address, acc_reward_per_share: i128) -> i128 {
        let Some(mut share) = self.shares.get(adapter.clone()) else {
            return 0;
        };
        let accrued = pending(e, share.amount, share.reward_debt, acc_reward_per_share);
        self.unclaimed = add(e, self.unclaimed, accrued);
        share.reward_debt = reward_debt(e, share.amount, acc_reward_per_share);
        self.shares.set(adapter.clone(), share);
        accrued
    }

    /// Set the principal routed to `adapter`, checkpointed at `acc_reward_per_share`
    ///
    /// Any reward accrued on the previous amount must be credited with
    /// `checkpoint` first. A zero amount removes the share.
    pub fn set_amount(&mut self, e: &Env, adapter: &Address, amount: i128, acc_reward_per_share: i128) {
        if amount == 0 {
            self.shares.remove(adapter.clone());
            return;
        }
        self.shares.set(
            adapter.clone(),
            AdapterShare {
                amount,
                reward_debt: reward_debt(e, amount, acc_reward_per_share),
            },
        );
    }

    /// Take the settled reward out of the position
    pub fn take_unclaimed(&mut self) -> i128 {
        let unclaimed = self.unclaimed;
        self.unclaimed = 0;
        unclaimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reward_accumulator::SCALAR_12;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_checkpoint_credits_and_resets() {
        let e = Env::default();
        let adapter = Address::generate(&e);
        let mut position = UserPosition::new(&e, 0);
        position.set_amount(&e, &adapter, 5, 0);
        position.principal = 5;

        // 2 reward per unit accrued
        let acc = 2 * SCALAR_12;
        assert_eq!(position.checkpoint(&e, &adapter, acc), 10);
        assert_eq!(position.unclaimed, 10);
        assert_eq!(position.shares.get(adapter.clone()).unwrap().reward_debt, 10);

        // checkpointing again at the same value credits nothing
        assert_eq!(position.checkpoint(&e, &adapter, acc), 0);
        assert_eq!(position.take_unclaimed(), 10);
        assert_eq!(position.unclaimed, 0);
    }

    #[test]
    fn test_set_amount_keeps_shares_consistent() {
        let e = Env::default();
        let adapter_a = Address::generate(&e);
        let adapter_b = Address::generate(&e);
        let mut position = UserPosition::new(&e, 0);

        position.set_amount(&e, &adapter_a, 6, SCALAR_12);
        position.set_amount(&e, &adapter_b, 4, 3 * SCALAR_12);
        assert_eq!(position.amount_at(&adapter_a), 6);
        assert_eq!(position.amount_at(&adapter_b), 4);
        assert_eq!(position.shares.get(adapter_b.clone()).unwrap().reward_debt, 12);

        position.set_amount(&e, &adapter_a, 0, SCALAR_12);
        assert_eq!(position.amount_at(&adapter_a), 0);
        assert!(!position.shares.contains_key(adapter_a));
        assert_eq!(position.shares.len(), 1);
    }

    #[test]
    fn test_checkpoint_unknown_adapter_is_noop() {
        let e = Env::default();
        let mut position = UserPosition::new(&e, 0);
        assert_eq!(position.checkpoint(&e, &Address::generate(&e), 5 * SCALAR_12), 0);
        assert_eq!(position.unclaimed, 0);
    }
}
