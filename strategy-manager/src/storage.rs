use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};
use crate::types::{AdapterPosition, AuthorityConfig, Strategy, UserPosition};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const PROPOSED_ADMIN_KEY: &str = "PropAdmin";
const TOKEN_KEY: &str = "Token";
const CONFIG_KEY: &str = "Config";
const STATUS_KEY: &str = "Status";
const STRATEGY_COUNTER_KEY: &str = "StratCtr";

/// Key of a user's position within a strategy
#[derive(Clone)]
#[contracttype]
pub struct PositionKey {
    pub strategy_id: u32,
    pub user: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum StrategyDataKey {
    // The strategy definition and counters
    Strategy(u32),
    // Users with an active position in a strategy
    Participants(u32),
    // The manager's accumulator state at an adapter
    AdapterPosition(Address),
    // A user's position in a strategy
    Position(PositionKey),
    // Whether an adapter may be referenced by strategies
    AllowedAdapter(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Admin **********/

/// Fetch the current admin Address
///
/// ### Panics
/// If the admin does not exist
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set a new admin
///
/// ### Arguments
/// * `new_admin` - The Address for the admin
pub fn set_admin(e: &Env, new_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), new_admin);
}

/// Fetch the current proposed admin Address, if any
pub fn get_proposed_admin(e: &Env) -> Option<Address> {
    e.storage()
        .temporary()
        .get(&Symbol::new(e, PROPOSED_ADMIN_KEY))
}

/// Set a new proposed admin
///
/// ### Arguments
/// * `proposed_admin` - The Address for the proposed admin
pub fn set_proposed_admin(e: &Env, proposed_admin: &Address) {
    e.storage()
        .temporary()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY), proposed_admin);
    e.storage().temporary().extend_ttl(
        &Symbol::new(e, PROPOSED_ADMIN_KEY),
        10 * ONE_DAY_LEDGERS,
        10 * ONE_DAY_LEDGERS,
    );
}

/// Clear the proposed admin once accepted
pub fn del_proposed_admin(e: &Env) {
    e.storage()
        .temporary()
        .remove(&Symbol::new(e, PROPOSED_ADMIN_KEY));
}

/********** Token **********/

/// Fetch the base asset address
///
/// ### Panics
/// If the token address is not set
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the base asset address (only during construction)
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/********** Authority Config **********/

/// Fetch the authority configuration
///
/// ### Panics
/// If the config is not set
pub fn get_config(e: &Env) -> AuthorityConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

/// Set the authority configuration
pub fn set_config(e: &Env, config: &AuthorityConfig) {
    e.storage()
        .instance()
        .set::<Symbol, AuthorityConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Status **********/

pub fn get_status(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, STATUS_KEY))
        .unwrap_or(0)
}

pub fn set_status(e: &Env, status: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, STATUS_KEY), &status);
}

/********** Strategy Counter **********/

/// Fetch the number of strategies created so far
pub fn get_strategy_counter(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, STRATEGY_COUNTER_KEY))
        .unwrap_or(0)
}

/// Increment the strategy counter and return the new ID
pub fn bump_strategy_id(e: &Env) -> u32 {
    let new_id = get_strategy_counter(e) + 1;
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, STRATEGY_COUNTER_KEY), &new_id);
    new_id
}

/********** Strategies **********/

/// Fetch a strategy by ID
///
/// ### Arguments
/// * `strategy_id` - The ID of the strategy
pub fn get_strategy(e: &Env, strategy_id: u32) -> Option<Strategy> {
    let key = StrategyDataKey::Strategy(strategy_id);
    let strategy = e
        .storage()
        .persistent()
        .get::<StrategyDataKey, Strategy>(&key);
    if strategy.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    strategy
}

/// Set a strategy
///
/// ### Arguments
/// * `strategy` - The strategy, keyed by its ID
pub fn set_strategy(e: &Env, strategy: &Strategy) {
    let key = StrategyDataKey::Strategy(strategy.id);
    e.storage()
        .persistent()
        .set::<StrategyDataKey, Strategy>(&key, strategy);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Participants **********/

/// Fetch the users with an active position in a strategy
pub fn get_participants(e: &Env, strategy_id: u32) -> Vec<Address> {
    let key = StrategyDataKey::Participants(strategy_id);
    get_persistent_default(
        e,
        &key,
        || Vec::new(e),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

pub fn set_participants(e: &Env, strategy_id: u32, participants: &Vec<Address>) {
    let key = StrategyDataKey::Participants(strategy_id);
    e.storage()
        .persistent()
        .set::<StrategyDataKey, Vec<Address>>(&key, participants);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Add a user to a strategy's participants
pub fn add_participant(e: &Env, strategy_id: u32, user: &Address) {
    let mut participants = get_participants(e, strategy_id);
    participants.push_back(user.clone());
    set_participants(e, strategy_id, &participants);
}

/// Remove a user from a strategy's participants
pub fn remove_participant(e: &Env, strategy_id: u32, user: &Address) {
    let mut participants = get_participants(e, strategy_id);
    if let Some(index) = participants.first_index_of(user) {
        participants.remove(index);
    }
    set_participants(e, strategy_id, &participants);
}

/********** Adapter Positions **********/

/// Fetch the manager's position at an adapter, zeroed if the adapter was never used
pub fn get_adapter_position(e: &Env, adapter: &Address) -> AdapterPosition {
    let key = StrategyDataKey::AdapterPosition(adapter.clone());
    get_persistent_default(
        e,
        &key,
        || AdapterPosition {
            adapter: adapter.clone(),
            total_staked: 0,
            acc_reward_per_share: 0,
            last_settlement: e.ledger().timestamp(),
            total_harvested: 0,
        },
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

pub fn set_adapter_position(e: &Env, position: &AdapterPosition) {
    let key = StrategyDataKey::AdapterPosition(position.adapter.clone());
    e.storage()
        .persistent()
        .set::<StrategyDataKey, AdapterPosition>(&key, position);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Allowed Adapters **********/

pub fn is_adapter_allowed(e: &Env, adapter: &Address) -> bool {
    let key = StrategyDataKey::AllowedAdapter(adapter.clone());
    get_persistent_default(e, &key, || false, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

pub fn set_adapter_allowed(e: &Env, adapter: &Address, allowed: bool) {
    let key = StrategyDataKey::AllowedAdapter(adapter.clone());
    if allowed {
        e.storage()
            .persistent()
            .set::<StrategyDataKey, bool>(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    } else {
        e.storage().persistent().remove(&key);
    }
}

/********** User Positions **********/

fn position_key(strategy_id: u32, user: &Address) -> StrategyDataKey {
    StrategyDataKey::Position(PositionKey {
        strategy_id,
        user: user.clone(),
    })
}

/// Fetch a user's position in a strategy
///
/// ### Arguments
/// * `strategy_id` - The ID of the strategy
/// * `user` - The address of the user
pub fn get_position(e: &Env, strategy_id: u32, user: &Address) -> Option<UserPosition> {
    let key = position_key(strategy_id, user);
    let position = e
        .storage()
        .persistent()
        .get::<StrategyDataKey, UserPosition>(&key);
    if position.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    }
    position
}

/// Set a user's position in a strategy
pub fn set_position(e: &Env, strategy_id: u32, user: &Address, position: &UserPosition) {
    let key = position_key(strategy_id, user);
    e.storage()
        .persistent()
        .set::<StrategyDataKey, UserPosition>(&key, position);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Delete a user's position in a strategy
pub fn remove_position(e: &Env, strategy_id: u32, user: &Address) {
    let key = position_key(strategy_id, user);
    e.storage().persistent().remove(&key);
}
