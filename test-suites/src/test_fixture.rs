use std::ops::Index;

use crate::faulty_adapter::{FaultyAdapterContract, FaultyAdapterContractClient};
use crate::token::create_stellar_token;
use reward_adapter::{RewardAdapterClient, RewardAdapterContract};
use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec as svec, Address, Env, String, Symbol, Vec as SorobanVec};
use strategy_manager::testutils::{allocation, default_config};
use strategy_manager::{
    AdapterPosition, StrategyManagerClient, StrategyManagerContract, UserPosition,
};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AdapterIndex {
    A = 0,
    B = 1,
    C = 2,
}

impl<'a> Index<AdapterIndex> for Vec<RewardAdapterClient<'a>> {
    type Output = RewardAdapterClient<'a>;

    fn index(&self, index: AdapterIndex) -> &Self::Output {
        &self[index as usize]
    }
}

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub treasury: Address,
    pub creator: Address,
    pub funder: Address,
    pub manager: StrategyManagerClient<'a>,
    pub adapters: Vec<RewardAdapterClient<'a>>,
    pub oracle: MockPriceOracleClient<'a>,
    pub token: MockTokenClient<'a>,
}

impl TestFixture<'_> {
    /// Deploy a base token, a mock oracle, three allow-listed reward adapters and the manager
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();
        e.ledger().set_timestamp(1_700_000_000);

        let admin = Address::generate(&e);
        let treasury = Address::generate(&e);
        let creator = Address::generate(&e);
        let funder = Address::generate(&e);

        let (token_id, token) = create_stellar_token(&e, &admin);
        token.mint(&funder, &(1_000_000_000 * crate::SCALAR_7));

        let oracle_id = e.register(MockPriceOracleWASM, ());
        let oracle = MockPriceOracleClient::new(&e, &oracle_id);
        oracle.set_data(
            &admin,
            &Asset::Other(Symbol::new(&e, "USD")),
            &svec![&e, Asset::Stellar(token_id.clone())],
            &7,
            &300,
        );
        oracle.set_price_stable(&svec![&e, 0_5000000]); // 0.5 USD

        let manager_id = e.register(
            StrategyManagerContract {},
            (
                admin.clone(),
                token_id.clone(),
                default_config(&treasury, &oracle_id),
            ),
        );
        let manager = StrategyManagerClient::new(&e, &manager_id);

        let mut adapters = vec![];
        for _ in 0..3 {
            let adapter_id = e.register(RewardAdapterContract {}, (admin.clone(), token_id.clone()));
            manager.set_adapter(&adapter_id, &true);
            adapters.push(RewardAdapterClient::new(&e, &adapter_id));
        }

        TestFixture {
            env: e,
            admin,
            treasury,
            creator,
            funder,
            manager,
            adapters,
            oracle,
            token,
        }
    }

    /// Generate a user holding `balance` base tokens
    pub fn create_user(&self, balance: i128) -> Address {
        let user = Address::generate(&self.env);
        if balance > 0 {
            self.token.mint(&user, &balance);
        }
        user
    }

    /// Deploy and allow-list another reward adapter, returning its index in `adapters`
    pub fn add_adapter(&mut self) -> usize {
        let adapter_id = self.env.register(
            RewardAdapterContract {},
            (self.admin.clone(), self.token.address.clone()),
        );
        self.manager.set_adapter(&adapter_id, &true);
        self.adapters.push(RewardAdapterClient::new(&self.env, &adapter_id));
        self.adapters.len() - 1
    }

    /// Deploy and allow-list an adapter whose reward claims can be made to fail
    pub fn add_faulty_adapter(&self) -> FaultyAdapterContractClient<'_> {
        let adapter_id = self
            .env
            .register(FaultyAdapterContract {}, (self.token.address.clone(),));
        self.manager.set_adapter(&adapter_id, &true);
        FaultyAdapterContractClient::new(&self.env, &adapter_id)
    }

    /// Move every pending participant of `strategy_id` onto the current allocations
    pub fn rebalance_all(&self, strategy_id: u32) {
        let participants = self.manager.get_participants(&strategy_id).len();
        let mut start = 0;
        while start < participants {
            self.manager.rebalance(&strategy_id, &start, &20);
            start += 20;
        }
        assert_eq!(self.manager.strategy_info(&strategy_id).pending_rebalance, 0);
    }

    /// Create a strategy owned by the fixture's creator
    pub fn create_strategy(&self, weights: &[(AdapterIndex, u32)], performance_fee: u32) -> u32 {
        self.manager.create_strategy(
            &self.creator,
            &self.allocations(weights),
            &performance_fee,
            &String::from_str(&self.env, "ipfs://strategy"),
        )
    }

    pub fn allocations(&self, weights: &[(AdapterIndex, u32)]) -> SorobanVec<strategy_manager::AllocationEntry> {
        let mut allocations = svec![&self.env];
        for (index, weight) in weights {
            allocations.push_back(allocation(&self.adapters[*index].address, *weight));
        }
        allocations
    }

    /// Pay `amount` reward into an adapter for its current stakers
    pub fn fund_adapter(&self, index: AdapterIndex, amount: i128) {
        self.adapters[index].fund_rewards(&self.funder, &amount);
    }

    pub fn balance(&self, address: &Address) -> i128 {
        self.token.balance(address)
    }

    pub fn adapter_position(&self, index: AdapterIndex) -> AdapterPosition {
        self.manager.get_adapter_position(&self.adapters[index].address)
    }

    pub fn position(&self, strategy_id: u32, user: &Address) -> UserPosition {
        self.manager.get_position(&strategy_id, user).unwrap()
    }

    /// Sum of the amounts every participant of `strategy_id` routes to an adapter
    pub fn routed_to(&self, strategy_id: u32, index: AdapterIndex) -> i128 {
        let adapter = &self.adapters[index].address;
        self.manager
            .get_participants(&strategy_id)
            .iter()
            .map(|user| {
                self.position(strategy_id, &user)
                    .shares
                    .get(adapter.clone())
                    .map(|share| share.amount)
                    .unwrap_or(0)
            })
            .sum()
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp().saturating_add(time));
    }
}
