use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::{BPS_DENOMINATOR, MAX_PERFORMANCE_FEE_CEILING, STATUS_ACTIVE, STATUS_FROZEN};
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::types::AuthorityConfig;

pub fn execute_initialize(e: &Env, admin: &Address, token: &Address, config: &AuthorityConfig) {
    require_valid_config(e, config);
    storage::set_admin(e, admin);
    storage::set_token(e, token);
    storage::set_config(e, config);
    storage::set_status(e, STATUS_ACTIVE);
}

pub fn execute_set_config(e: &Env, config: &AuthorityConfig) {
    require_valid_config(e, config);
    let old = storage::get_config(e);
    storage::set_config(e, config);
    StrategyEvents::set_config(e, old, config.clone());
}

pub fn execute_set_adapter(e: &Env, adapter: &Address, allowed: bool) {
    storage::set_adapter_allowed(e, adapter, allowed);
    StrategyEvents::set_adapter(e, adapter.clone(), allowed);
}

pub fn execute_set_status(e: &Env, status: u32) {
    if status != STATUS_ACTIVE && status != STATUS_FROZEN {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
    storage::set_status(e, status);
    StrategyEvents::set_status(e, status);
}

/// Require the manager to accept new capital and allocation changes
pub fn require_active(e: &Env) {
    if storage::get_status(e) != STATUS_ACTIVE {
        panic_with_error!(e, StrategyError::ContractPaused);
    }
}

fn require_valid_config(e: &Env, config: &AuthorityConfig) {
    if config.max_performance_fee > MAX_PERFORMANCE_FEE_CEILING {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
    if config.creator_fee_share > BPS_DENOMINATOR {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
}
