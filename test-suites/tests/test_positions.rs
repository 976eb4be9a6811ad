use soroban_sdk::vec as svec;
use strategy_manager::StrategyError;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::{AdapterIndex, TestFixture};
use test_suites::{contract_error, SCALAR_7};

#[test]
fn test_deposit_routes_by_weight() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));

    let position = fixture.position(strategy_id, &alice);
    assert_eq!(position.principal, 10 * SCALAR_7);
    assert_eq!(position.unclaimed, 0);
    assert_eq!(position.shares.len(), 2);
    assert_eq!(
        position.shares.get(fixture.adapters[AdapterIndex::A].address.clone()).unwrap().amount,
        5 * SCALAR_7
    );
    assert_eq!(
        position.shares.get(fixture.adapters[AdapterIndex::B].address.clone()).unwrap().amount,
        5 * SCALAR_7
    );

    // tokens sit in the adapters, not the manager
    assert_eq!(fixture.balance(&alice), 90 * SCALAR_7);
    assert_eq!(fixture.balance(&fixture.manager.address), 0);
    assert_eq!(fixture.balance(&fixture.adapters[AdapterIndex::A].address), 5 * SCALAR_7);
    assert_eq!(
        fixture.adapters[AdapterIndex::A].staked(&fixture.manager.address),
        5 * SCALAR_7
    );
    assert_eq!(fixture.adapter_position(AdapterIndex::A).total_staked, 5 * SCALAR_7);
    assert_eq!(fixture.adapter_position(AdapterIndex::B).total_staked, 5 * SCALAR_7);

    let info = fixture.manager.strategy_info(&strategy_id);
    assert_eq!(info.total_value_locked, 10 * SCALAR_7);
    assert_eq!(info.participant_count, 1);
    assert_eq!(info.cumulative_profit, 0);
    assert_eq!(fixture.manager.get_participants(&strategy_id), svec![&fixture.env, alice]);
}

#[test]
fn test_deposit_assigns_remainder_to_last_adapter() {
    let fixture = TestFixture::create();
    let strategy_id = fixture.create_strategy(
        &[
            (AdapterIndex::A, 3_333),
            (AdapterIndex::B, 3_333),
            (AdapterIndex::C, 3_334),
        ],
        0,
    );
    let alice = fixture.create_user(100);

    fixture.manager.deposit(&alice, &strategy_id, &7);

    assert_eq!(fixture.routed_to(strategy_id, AdapterIndex::A), 2);
    assert_eq!(fixture.routed_to(strategy_id, AdapterIndex::B), 2);
    assert_eq!(fixture.routed_to(strategy_id, AdapterIndex::C), 3);
    assert_eq!(fixture.position(strategy_id, &alice).principal, 7);
}

#[test]
fn test_deposit_then_withdraw_returns_deposit() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    let paid = fixture.manager.withdraw(&alice, &strategy_id);

    assert_eq!(paid, 10 * SCALAR_7);
    assert_eq!(fixture.balance(&alice), 100 * SCALAR_7);
    assert!(fixture.manager.get_position(&strategy_id, &alice).is_none());
    assert!(fixture.manager.get_participants(&strategy_id).is_empty());
    assert_eq!(fixture.adapter_position(AdapterIndex::A).total_staked, 0);
    assert_eq!(fixture.adapter_position(AdapterIndex::B).total_staked, 0);

    let info = fixture.manager.strategy_info(&strategy_id);
    assert_eq!(info.total_value_locked, 0);
    assert_eq!(info.participant_count, 0);
    assert_eq!(info.cumulative_profit, 0);

    // nothing charged to creator or treasury
    assert_eq!(fixture.balance(&fixture.creator), 0);
    assert_eq!(fixture.balance(&fixture.treasury), 0);
}

#[test]
fn test_repeat_deposits_keep_one_participant() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);
    let bob = fixture.create_user(100 * SCALAR_7);

    fixture.manager.deposit(&alice, &strategy_id, &(10 * SCALAR_7));
    fixture.manager.deposit(&alice, &strategy_id, &(6 * SCALAR_7));
    fixture.manager.deposit(&bob, &strategy_id, &(4 * SCALAR_7));

    let position = fixture.position(strategy_id, &alice);
    assert_eq!(position.principal, 16 * SCALAR_7);

    let info = fixture.manager.strategy_info(&strategy_id);
    assert_eq!(info.total_value_locked, 20 * SCALAR_7);
    assert_eq!(info.participant_count, 2);
    assert_eq!(fixture.adapter_position(AdapterIndex::A).total_staked, 10 * SCALAR_7);
    assert_eq!(fixture.routed_to(strategy_id, AdapterIndex::A), 10 * SCALAR_7);

    fixture.manager.withdraw(&alice, &strategy_id);
    assert_eq!(fixture.manager.get_participants(&strategy_id), svec![&fixture.env, bob]);
    assert_eq!(fixture.manager.strategy_info(&strategy_id).participant_count, 1);
    assert_eq!(fixture.adapter_position(AdapterIndex::B).total_staked, 2 * SCALAR_7);
}

#[test]
fn test_deposit_rejects_non_positive_amount() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    let result = fixture.manager.try_deposit(&alice, &strategy_id, &0);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::ZeroAmount))));

    let result = fixture.manager.try_deposit(&alice, &strategy_id, &-SCALAR_7);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::ZeroAmount))));
}

#[test]
fn test_unknown_strategy() {
    let (fixture, _) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    let result = fixture.manager.try_deposit(&alice, &99, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::InvalidStrategy))));

    let result = fixture.manager.try_withdraw(&alice, &99);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::InvalidStrategy))));

    let result = fixture.manager.try_get_strategy(&99);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::InvalidStrategy))));
}

#[test]
fn test_withdraw_and_claim_require_a_position() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(100 * SCALAR_7);

    let result = fixture.manager.try_withdraw(&alice, &strategy_id);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::Unauthorized))));

    let result = fixture.manager.try_claim(&alice, &strategy_id);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::Unauthorized))));

    // a closed position cannot be withdrawn twice
    fixture.manager.deposit(&alice, &strategy_id, &SCALAR_7);
    fixture.manager.withdraw(&alice, &strategy_id);
    let result = fixture.manager.try_withdraw(&alice, &strategy_id);
    assert_eq!(result.err(), Some(Ok(contract_error(StrategyError::Unauthorized))));
}

#[test]
fn test_pending_reward_for_unknown_user_is_zero() {
    let (fixture, strategy_id) = create_fixture_with_data();
    let alice = fixture.create_user(0);
    assert_eq!(fixture.manager.pending_reward(&strategy_id, &alice), 0);
}
