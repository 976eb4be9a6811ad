use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, map, panic_with_error, vec, Address, Env, IntoVal, Map, Symbol, Val, Vec};

use crate::dependencies::AdapterClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::fees::{calculate_fee_split, FeeSplit};
use crate::types::{AdapterPosition, AuthorityConfig, Strategy};

/// In-memory view of the manager for a single invocation
///
/// Adapter positions are cached on first use and written back with
/// `store_cached_adapters`. Each adapter is settled at most once per invocation.
pub struct Manager {
    pub config: AuthorityConfig,
    pub token: Address,
    adapters: Map<Address, AdapterPosition>,
    settled: Vec<Address>,
}

impl Manager {
    pub fn load(e: &Env) -> Self {
        Manager {
            config: storage::get_config(e),
            token: storage::get_token(e),
            adapters: map![e],
            settled: vec![e],
        }
    }

    pub fn load_adapter(&self, e: &Env, adapter: &Address) -> AdapterPosition {
        if let Some(position) = self.adapters.get(adapter.clone()) {
            position
        } else {
            storage::get_adapter_position(e, adapter)
        }
    }

    pub fn cache_adapter(&mut self, position: &AdapterPosition) {
        self.adapters.set(position.adapter.clone(), position.clone());
    }

    pub fn store_cached_adapters(&self, e: &Env) {
        for position in self.adapters.values().iter() {
            storage::set_adapter_position(e, &position);
        }
    }

    /// Harvest the manager's reward at `adapter` and accrue it over the current stake
    ///
    /// Returns the settled adapter position
    ///
    /// ### Panics
    /// `AdapterClaimFailed` if the adapter fails or reports a negative reward
    pub fn settle(&mut self, e: &Env, adapter: &Address) -> AdapterPosition {
        let mut position = self.load_adapter(e, adapter);
        if self.settled.contains(adapter) {
            return position;
        }

        if position.total_staked > 0 {
            let harvested =
                match AdapterClient::new(e, adapter).try_claim(&e.current_contract_address()) {
                    Ok(Ok(harvested)) if harvested >= 0 => harvested,
                    _ => panic_with_error!(e, StrategyError::AdapterClaimFailed),
                };
            position.accrue(e, harvested);
            StrategyEvents::settle(e, adapter.clone(), harvested, position.acc_reward_per_share);
        } else {
            log!(e, "settle skipped, nothing staked", adapter.clone());
        }
        position.last_settlement = e.ledger().timestamp();

        self.settled.push_back(adapter.clone());
        self.cache_adapter(&position);
        position
    }

    /// Route `amount` base tokens from the manager into `adapter`
    ///
    /// ### Panics
    /// `AdapterStakeFailed` if the adapter rejects the stake
    pub fn stake(&mut self, e: &Env, adapter: &Address, amount: i128) {
        if amount <= 0 {
            return;
        }
        let mut position = self.settle(e, adapter);

        // Authorize the token pull that happens inside the adapter's stake
        let args: Vec<Val> = vec![
            e,
            e.current_contract_address().into_val(e),
            adapter.into_val(e),
            amount.into_val(e),
        ];
        e.authorize_as_current_contract(vec![
            e,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: self.token.clone(),
                    fn_name: Symbol::new(e, "transfer"),
                    args,
                },
                sub_invocations: vec![e],
            }),
        ]);

        match AdapterClient::new(e, adapter).try_stake(&e.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => panic_with_error!(e, StrategyError::AdapterStakeFailed),
        }

        position.add_stake(e, amount);
        self.cache_adapter(&position);
    }

    /// Pull `amount` of the manager's stake out of `adapter`
    ///
    /// Returns the base tokens the adapter paid out, which may differ from `amount`
    ///
    /// ### Panics
    /// `AdapterUnstakeFailed` if the adapter fails or reports a negative payout
    pub fn unstake(&mut self, e: &Env, adapter: &Address, amount: i128) -> i128 {
        if amount <= 0 {
            return 0;
        }
        let mut position = self.settle(e, adapter);

        let payout =
            match AdapterClient::new(e, adapter).try_unstake(&e.current_contract_address(), &amount) {
                Ok(Ok(payout)) if payout >= 0 => payout,
                _ => panic_with_error!(e, StrategyError::AdapterUnstakeFailed),
            };

        position.remove_stake(e, amount);
        self.cache_adapter(&position);
        payout
    }

    /// Take the performance fee out of `gross` and pay the creator and treasury legs
    pub fn distribute_fee(&self, e: &Env, strategy: &Strategy, gross: i128) -> FeeSplit {
        let split = calculate_fee_split(gross, strategy.performance_fee, self.config.creator_fee_share)
            .unwrap_or_else(|| panic_with_error!(e, StrategyError::ArithmeticOverflow));
        self.transfer(e, &strategy.creator, split.creator_fee);
        self.transfer(e, &self.config.treasury, split.treasury_fee);
        split
    }

    /// Pull `amount` base tokens from `from` into the manager
    pub fn receive(&self, e: &Env, from: &Address, amount: i128) {
        TokenClient::new(e, &self.token).transfer(from, &e.current_contract_address(), &amount);
    }

    /// Pay `amount` base tokens out of the manager, skipping empty transfers
    pub fn transfer(&self, e: &Env, to: &Address, amount: i128) {
        if amount > 0 {
            TokenClient::new(e, &self.token).transfer(&e.current_contract_address(), to, &amount);
        }
    }
}
