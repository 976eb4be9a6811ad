#![no_std]

mod errors;
mod storage;
mod contract;
pub use contract::{RewardAdapterContract, RewardAdapterContractClient, RewardAdapterClient};
pub use errors::AdapterError;
pub use storage::StakerInfo;
mod events;
