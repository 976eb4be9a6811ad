pub mod faulty_adapter;
pub mod setup;
pub mod test_fixture;
pub mod token;

use strategy_manager::StrategyError;

pub const SCALAR_7: i128 = 10_000_000;

/// The host error a failed manager invocation surfaces through a `try_` call
pub fn contract_error(error: StrategyError) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(error as u32)
}
