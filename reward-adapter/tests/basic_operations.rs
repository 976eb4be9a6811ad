//! Reward adapter integration tests
//!
//! Tests staking, unstaking, reward distribution pro rata to stake,
//! pausing, and error conditions.

use reward_adapter::{AdapterError, RewardAdapterContract, RewardAdapterContractClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, Error,
};

const SCALAR_7: i128 = 10_000_000;

// ================================
// Test Setup Utilities
// ================================

fn setup_adapter<'a>() -> (Env, Address, Address, Address, RewardAdapterContractClient<'a>) {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let adapter_address = env.register(RewardAdapterContract, (admin.clone(), token.clone()));
    let adapter = RewardAdapterContractClient::new(&env, &adapter_address);

    (env, admin, token, adapter_address, adapter)
}

fn funded_user(env: &Env, token: &Address, amount: i128) -> Address {
    let user = Address::generate(env);
    StellarAssetClient::new(env, token).mint(&user, &amount);
    user
}

fn contract_error(error: AdapterError) -> Error {
    Error::from_contract_error(error as u32)
}

// ================================
// Basic Functionality Tests
// ================================

#[test]
fn test_stake_and_unstake() {
    let (env, _, token, adapter_address, adapter) = setup_adapter();
    let token_client = TokenClient::new(&env, &token);
    let user = funded_user(&env, &token, 1_000 * SCALAR_7);

    adapter.stake(&user, &(400 * SCALAR_7));
    assert_eq!(adapter.staked(&user), 400 * SCALAR_7);
    assert_eq!(adapter.total_staked(), 400 * SCALAR_7);
    assert_eq!(token_client.balance(&adapter_address), 400 * SCALAR_7);
    assert_eq!(token_client.balance(&user), 600 * SCALAR_7);

    let payout = adapter.unstake(&user, &(150 * SCALAR_7));
    assert_eq!(payout, 150 * SCALAR_7);
    assert_eq!(adapter.staked(&user), 250 * SCALAR_7);
    assert_eq!(adapter.total_staked(), 250 * SCALAR_7);
    assert_eq!(token_client.balance(&user), 750 * SCALAR_7);
    assert_eq!(adapter.token(), token);
}

#[test]
fn test_rewards_are_pro_rata_to_stake() {
    let (env, _, token, _, adapter) = setup_adapter();
    let token_client = TokenClient::new(&env, &token);
    let user1 = funded_user(&env, &token, 1_000 * SCALAR_7);
    let user2 = funded_user(&env, &token, 1_000 * SCALAR_7);
    let funder = funded_user(&env, &token, 1_000 * SCALAR_7);

    adapter.stake(&user1, &(300 * SCALAR_7));
    adapter.stake(&user2, &(100 * SCALAR_7));
    adapter.fund_rewards(&funder, &(40 * SCALAR_7));

    assert_eq!(adapter.pending_reward(&user1), 30 * SCALAR_7);
    assert_eq!(adapter.pending_reward(&user2), 10 * SCALAR_7);

    let reward = adapter.claim(&user1);
    assert_eq!(reward, 30 * SCALAR_7);
    assert_eq!(token_client.balance(&user1), 730 * SCALAR_7);
    assert_eq!(adapter.pending_reward(&user1), 0);

    // claiming again pays nothing
    assert_eq!(adapter.claim(&user1), 0);
}

#[test]
fn test_late_staker_does_not_earn_earlier_rewards() {
    let (env, _, token, _, adapter) = setup_adapter();
    let user1 = funded_user(&env, &token, 1_000 * SCALAR_7);
    let user2 = funded_user(&env, &token, 1_000 * SCALAR_7);
    let funder = funded_user(&env, &token, 1_000 * SCALAR_7);

    adapter.stake(&user1, &(100 * SCALAR_7));
    adapter.fund_rewards(&funder, &(10 * SCALAR_7));
    adapter.stake(&user2, &(100 * SCALAR_7));

    assert_eq!(adapter.pending_reward(&user2), 0);
    assert_eq!(adapter.pending_reward(&user1), 10 * SCALAR_7);

    adapter.fund_rewards(&funder, &(10 * SCALAR_7));
    assert_eq!(adapter.pending_reward(&user1), 15 * SCALAR_7);
    assert_eq!(adapter.pending_reward(&user2), 5 * SCALAR_7);
}

#[test]
fn test_reward_survives_stake_changes() {
    let (env, _, token, _, adapter) = setup_adapter();
    let user = funded_user(&env, &token, 1_000 * SCALAR_7);
    let funder = funded_user(&env, &token, 1_000 * SCALAR_7);

    adapter.stake(&user, &(100 * SCALAR_7));
    adapter.fund_rewards(&funder, &(7 * SCALAR_7));
    adapter.stake(&user, &(50 * SCALAR_7));
    adapter.unstake(&user, &(150 * SCALAR_7));

    assert_eq!(adapter.staked(&user), 0);
    assert_eq!(adapter.pending_reward(&user), 7 * SCALAR_7);
    assert_eq!(adapter.claim(&user), 7 * SCALAR_7);
}

// ================================
// Pause Tests
// ================================

#[test]
fn test_paused_blocks_stake_and_unstake_but_not_claim() {
    let (env, _, token, _, adapter) = setup_adapter();
    let user = funded_user(&env, &token, 1_000 * SCALAR_7);
    let funder = funded_user(&env, &token, 1_000 * SCALAR_7);

    adapter.stake(&user, &(100 * SCALAR_7));
    adapter.fund_rewards(&funder, &SCALAR_7);
    adapter.set_paused(&true);

    let result = adapter.try_stake(&user, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(contract_error(AdapterError::AdapterPaused))));

    let result = adapter.try_unstake(&user, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(contract_error(AdapterError::AdapterPaused))));

    assert_eq!(adapter.claim(&user), SCALAR_7);

    adapter.set_paused(&false);
    assert_eq!(adapter.unstake(&user, &(100 * SCALAR_7)), 100 * SCALAR_7);
}

// ================================
// Error Condition Tests
// ================================

#[test]
fn test_zero_amounts_rejected() {
    let (env, _, token, _, adapter) = setup_adapter();
    let user = funded_user(&env, &token, 1_000 * SCALAR_7);

    let result = adapter.try_stake(&user, &0);
    assert_eq!(result.err(), Some(Ok(contract_error(AdapterError::ZeroAmount))));

    let result = adapter.try_unstake(&user, &-1);
    assert_eq!(result.err(), Some(Ok(contract_error(AdapterError::ZeroAmount))));
}

#[test]
fn test_unstake_more_than_staked() {
    let (env, _, token, _, adapter) = setup_adapter();
    let user = funded_user(&env, &token, 1_000 * SCALAR_7);

    adapter.stake(&user, &(10 * SCALAR_7));
    let result = adapter.try_unstake(&user, &(10 * SCALAR_7 + 1));
    assert_eq!(result.err(), Some(Ok(contract_error(AdapterError::InsufficientStake))));
}

#[test]
fn test_fund_rewards_without_stakers() {
    let (env, _, token, _, adapter) = setup_adapter();
    let funder = funded_user(&env, &token, 1_000 * SCALAR_7);

    let result = adapter.try_fund_rewards(&funder, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(contract_error(AdapterError::NoStakers))));
}
