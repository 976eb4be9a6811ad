use soroban_fixed_point_math::FixedPoint;
use strategy_manager::StrategyError;
use test_suites::setup::{create_fixture_with_data, DEFAULT_PERFORMANCE_FEE};
use test_suites::test_fixture::{AdapterIndex, TestFixture};
use test_suites::{contract_error, SCALAR_7};

#[test]
fn test_late_depositor_and_fee_scenario() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);
    let bob = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));

    // adapter A earns 1 token for the manager's 5 staked
    fixture.fund_adapter(AdapterIndex::A, SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), SCALAR_7);

    fixture.manager.deposit(&bob, &strategy_id, &(10 * SCALAR_7));
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &bob), 0);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), SCALAR_7);

    let adapter_a = fixture.adapter_position(AdapterIndex::A);
    assert_eq!(adapter_a.total_staked, 10 * SCALAR_7);
    assert_eq!(adapter_a.total_harvested, SCALAR_7);
    assert_eq!(adapter_a.acc_reward_per_share, 200_000_000_000); // 0.2 per unit

    // 5% fee on 1 token, 80% of it to the creator
    let fee = SCALAR_7
        .fixed_mul_floor(DEFAULT_PERFORMANCE_FEE as i128, 10_000)
        .unwrap();
    let creator_fee = fee.fixed_mul_floor(8_000, 10_000).unwrap();
    assert_eq!(fee, 500_000);

    let paid = fixture.manager.withdraw(&alice, &strategy_id);
    assert_eq!(paid, 10 * SCALAR_7 + SCALAR_7 - fee);
    assert_eq!(fixture.balance(&alice), 100 * SCALAR_7 + 9_500_000);
    assert_eq!(fixture.balance(&fixture.creator), creator_fee);
    assert_eq!(fixture.balance(&fixture.treasury), fee - creator_fee);
    assert_eq!(fixture.balance(&fixture.manager.address), 0);

    assert_eq!(fixture.adapter_position(AdapterIndex::A).total_staked, 5 * SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &bob), 0);

    let info = fixture.manager.strategy_info(&strategy_id);
    assert_eq!(info.total_value_locked, 10 * SCALAR_7);
    assert_eq!(info.participant_count, 1);
    assert_eq!(info.cumulative_profit, SCALAR_7);
}

#[test]
fn test_claim_pays_net_reward_and_keeps_principal() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    fixture.fund_adapter(AdapterIndex::A, 2 * SCALAR_7);
    fixture.fund_adapter(AdapterIndex::B, SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), 3 * SCALAR_7);

    let paid = fixture.manager.claim(&alice, &strategy_id);
    assert_eq!(paid, 28_500_000);
    assert_eq!(fixture.balance(&alice), 90 * SCALAR_7 + 28_500_000);
    assert_eq!(fixture.balance(&fixture.creator), 1_200_000);
    assert_eq!(fixture.balance(&fixture.treasury), 300_000);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), 0);

    let position = fixture.position(strategy_id, &alice);
    assert_eq!(position.principal, 10 * SCALAR_7);
    assert_eq!(position.unclaimed, 0);
    assert_eq!(fixture.adapter_position(AdapterIndex::A).total_staked, 5 * SCALAR_7);
    assert_eq!(fixture.manager.strategy_info(&strategy_id).cumulative_profit, 3 * SCALAR_7);

    // nothing new accrued
    let result = fixture.manager.try_claim(&alice, &strategy_id);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::NothingToClaim))));

    // later rewards are claimable again
    fixture.fund_adapter(AdapterIndex::B, SCALAR_7);
    assert_eq!(fixture.manager.claim(&alice, &strategy_id), 9_500_000);
}

#[test]
fn test_equal_deposits_earn_equal_rewards() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);
    let bob = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    fixture.manager.deposit(&bob, &strategy_id, &(10 * SCALAR_7));
    fixture.fund_adapter(AdapterIndex::A, 3 * SCALAR_7);

    let alice_pending = fixture.manager.pending_reward(&strategy_id, &alice);
    let bob_pending = fixture.manager.pending_reward(&strategy_id, &bob);
    assert_eq!(alice_pending, 15_000_000);
    assert_eq!(alice_pending, bob_pending);

    assert_eq!(
        fixture.manager.claim(&alice, &strategy_id),
        fixture.manager.claim(&bob, &strategy_id)
    );
}

#[test]
fn test_strategies_sharing_an_adapter_split_its_reward() {
    let fixture = TestFixture::create();
    let solo = fixture.create_strategy(&[(AdapterIndex::A, 10_000)], 0);
    let split = fixture.create_strategy(&[(AdapterIndex::A, 5_000), (AdapterIndex::B, 5_000)], 1_000);
    let alice = fixture.create_user(100 * SCALAR_7);
    let bob = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &solo, &(10 * SCALAR_7));
    fixture.manager.deposit(&bob, &split, &(20 * SCALAR_7));
    assert_eq!(fixture.adapter_position(AdapterIndex::A).total_staked, 20 * SCALAR_7);

    fixture.fund_adapter(AdapterIndex::A, 4 * SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&solo, &alice), 2 * SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&split, &bob), 2 * SCALAR_7);

    // no fee on the solo strategy, 10% on the split one
    assert_eq!(fixture.manager.claim(&alice, &solo), 2 * SCALAR_7);
    assert_eq!(fixture.manager.claim(&bob, &split), 18_000_000);
    assert_eq!(fixture.balance(&fixture.creator), 1_600_000);
    assert_eq!(fixture.balance(&fixture.treasury), 400_000);
}

#[test]
fn test_reward_checkpointed_on_top_up() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    fixture.fund_adapter(AdapterIndex::A, SCALAR_7);

    // a second deposit credits the reward so far instead of losing it
    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    let position = fixture.position(strategy_id, &alice);
    assert_eq!(position.unclaimed, SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), SCALAR_7);

    fixture.fund_adapter(AdapterIndex::A, SCALAR_7);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), 2 * SCALAR_7);
}

#[test]
fn test_settlement_is_recorded() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    let settled_at = fixture.adapter_position(AdapterIndex::A).last_settlement;
    assert_eq!(settled_at, fixture.env.ledger().timestamp());

    fixture.jump(3_600);
    fixture.fund_adapter(AdapterIndex::A, SCALAR_7);
    fixture.manager.claim(&alice, &strategy_id);

    let adapter_a = fixture.adapter_position(AdapterIndex::A);
    assert_eq!(adapter_a.last_settlement, settled_at + 3_600);
    assert_eq!(adapter_a.total_harvested, SCALAR_7);
}
