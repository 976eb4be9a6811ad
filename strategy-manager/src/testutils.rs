#![cfg(any(test, feature = "testutils"))]

use crate::storage;
use crate::{AllocationEntry, AuthorityConfig, StrategyManagerContract};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};

pub fn allocation(adapter: &Address, weight: u32) -> AllocationEntry {
    AllocationEntry {
        adapter: adapter.clone(),
        weight,
    }
}

pub fn default_config(treasury: &Address, oracle: &Address) -> AuthorityConfig {
    AuthorityConfig {
        treasury: treasury.clone(),
        oracle: oracle.clone(),
        max_performance_fee: 1_000, // 10%
        creator_fee_share: 8_000,   // 80% of the fee to the creator
    }
}

/// Register a manager with generated collaborators and `adapters` allow-listed adapter addresses
pub(crate) fn create_manager(e: &Env, adapters: u32) -> (Address, Vec<Address>) {
    e.mock_all_auths();
    let manager = e.register(
        StrategyManagerContract {},
        (
            Address::generate(e),
            Address::generate(e),
            default_config(&Address::generate(e), &Address::generate(e)),
        ),
    );

    let mut allowed = vec![e];
    for _ in 0..adapters {
        allowed.push_back(Address::generate(e));
    }
    e.as_contract(&manager, || {
        for adapter in allowed.iter() {
            storage::set_adapter_allowed(e, &adapter, true);
        }
    });
    (manager, allowed)
}
