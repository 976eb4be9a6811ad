use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakerInfo {
    pub amount: i128,      // Tokens staked
    pub reward_debt: i128, // amount * acc_reward_per_share at the last checkpoint
    pub owed: i128,        // Reward checkpointed but not yet claimed
}

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Staker(Address), // Stores StakerInfo
}

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

// Instance storage key strings
const ADMIN: &str = "Admin";
const TOKEN: &str = "Token";
const PAUSED: &str = "Paused";
const TOTAL_STAKED: &str = "TotalStaked";
const ACC_REWARD: &str = "AccReward";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, ADMIN)).unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&Symbol::new(e, ADMIN), admin);
}

pub fn get_token(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, TOKEN)).unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&Symbol::new(e, TOKEN), token);
}

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PAUSED))
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: &bool) {
    e.storage().instance().set(&Symbol::new(e, PAUSED), paused);
}

pub fn get_total_staked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_STAKED))
        .unwrap_or(0)
}

pub fn set_total_staked(e: &Env, total_staked: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, TOTAL_STAKED), total_staked);
}

pub fn get_acc_reward_per_share(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ACC_REWARD))
        .unwrap_or(0)
}

pub fn set_acc_reward_per_share(e: &Env, acc_reward_per_share: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, ACC_REWARD), acc_reward_per_share);
}

pub fn get_staker(e: &Env, staker: &Address) -> StakerInfo {
    let key = DataKey::Staker(staker.clone());
    match e.storage().persistent().get::<DataKey, StakerInfo>(&key) {
        Some(info) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
            info
        }
        None => StakerInfo {
            amount: 0,
            reward_debt: 0,
            owed: 0,
        },
    }
}

pub fn set_staker(e: &Env, staker: &Address, info: &StakerInfo) {
    let key = DataKey::Staker(staker.clone());
    if info.amount == 0 && info.owed == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, info);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
