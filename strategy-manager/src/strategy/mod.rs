mod accumulator;
mod config;
pub use config::{
    execute_initialize, execute_set_adapter, execute_set_config, execute_set_status,
};
mod fees;
pub use fees::{calculate_fee_split, FeeSplit};
mod ledger;
mod manager;
mod rebalance;
pub use rebalance::{execute_rebalance, execute_update_allocations};
mod registry;
pub use registry::{
    execute_create_strategy, execute_update_metadata, execute_update_performance_fee,
    split_by_weight,
};
mod user_actions;
pub use user_actions::{execute_claim, execute_deposit, execute_withdraw};
mod views;
pub use views::{execute_pending_reward, execute_strategy_value};
