use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::MAX_PRICE_AGE;
use crate::dependencies::AdapterClient;
use crate::errors::StrategyError;
use crate::storage;
use crate::strategy::accumulator::{accrue, add, pending};
use crate::types::{Strategy, UserPosition};

/// Reward a user would realize by claiming now, before the performance fee
///
/// Simulates settlement of every adapter the user holds a share in without
/// writing anything.
pub fn execute_pending_reward(e: &Env, strategy_id: u32, user: &Address) -> i128 {
    Strategy::load(e, strategy_id);
    let Some(position) = UserPosition::load(e, strategy_id, user) else {
        return 0;
    };

    let manager = e.current_contract_address();
    let mut total = position.unclaimed;
    for (adapter, share) in position.shares.iter() {
        let adapter_position = storage::get_adapter_position(e, &adapter);
        let acc = if adapter_position.total_staked > 0 {
            let unsettled = AdapterClient::new(e, &adapter).pending_reward(&manager);
            accrue(
                e,
                adapter_position.acc_reward_per_share,
                unsettled,
                adapter_position.total_staked,
            )
        } else {
            adapter_position.acc_reward_per_share
        };
        total = add(e, total, pending(e, share.amount, share.reward_debt, acc));
    }
    total
}

/// Value of a strategy's total value locked in the oracle's base currency
///
/// ### Panics
/// - `PriceNotFound` if the oracle has no price for the base token
/// - `PriceStale` if the price is older than `MAX_PRICE_AGE`
pub fn execute_strategy_value(e: &Env, strategy_id: u32) -> i128 {
    let strategy = Strategy::load(e, strategy_id);
    let config = storage::get_config(e);
    let oracle = PriceFeedClient::new(e, &config.oracle);

    let price_data = match oracle.lastprice(&Asset::Stellar(storage::get_token(e))) {
        Some(price) => price,
        None => panic_with_error!(e, StrategyError::PriceNotFound),
    };
    if price_data.timestamp + MAX_PRICE_AGE < e.ledger().timestamp() {
        panic_with_error!(e, StrategyError::PriceStale);
    }

    let scalar = 10i128.pow(oracle.decimals());
    strategy
        .total_value_locked
        .fixed_mul_floor(e, &price_data.price, &scalar)
}
