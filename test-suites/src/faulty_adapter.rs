use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, Address, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FaultyAdapterError {
    ClaimBroken = 1,
}

/// Adapter that custodies stake like a real venue, never accrues reward and can be
/// switched to fail every claim
#[contract]
pub struct FaultyAdapterContract;

#[contractimpl]
impl FaultyAdapterContract {
    pub fn __constructor(e: Env, token: Address) {
        e.storage().instance().set(&symbol_short!("token"), &token);
        e.storage().instance().set(&symbol_short!("broken"), &false);
    }

    pub fn set_broken(e: Env, broken: bool) {
        e.storage().instance().set(&symbol_short!("broken"), &broken);
    }

    pub fn stake(e: Env, caller: Address, amount: i128) {
        caller.require_auth();
        token_client(&e).transfer(&caller, &e.current_contract_address(), &amount);
    }

    pub fn unstake(e: Env, caller: Address, amount: i128) -> i128 {
        caller.require_auth();
        token_client(&e).transfer(&e.current_contract_address(), &caller, &amount);
        amount
    }

    pub fn pending_reward(_e: Env, _position: Address) -> i128 {
        0
    }

    pub fn claim(e: Env, caller: Address) -> i128 {
        caller.require_auth();
        let broken: bool = e
            .storage()
            .instance()
            .get(&symbol_short!("broken"))
            .unwrap_or(false);
        if broken {
            panic_with_error!(&e, FaultyAdapterError::ClaimBroken);
        }
        0
    }
}

fn token_client(e: &Env) -> token::Client<'_> {
    let token: Address = e
        .storage()
        .instance()
        .get(&symbol_short!("token"))
        .unwrap();
    token::Client::new(e, &token)
}
