#![no_std]

mod constants;
mod errors;
pub mod storage;
mod contract;
mod strategy;

pub use strategy::{calculate_fee_split, split_by_weight, FeeSplit};

mod types;
mod dependencies;
pub mod testutils;
mod events;

pub use contract::*;
pub use errors::StrategyError;
pub use types::*;
