use soroban_sdk::{contractclient, Address, Env};

/// Adapter client interface
///
/// Each adapter fronts one external yield venue. The manager stakes into an
/// adapter as a single position keyed by its own address.
#[contractclient(name = "AdapterClient")]
pub trait AdapterInterface {
    /// Pull `amount` base tokens from `caller` and stake them
    fn stake(e: Env, caller: Address, amount: i128);

    /// Unstake `amount` for `caller` and transfer the payout to it
    ///
    /// Returns the amount of base tokens paid out
    fn unstake(e: Env, caller: Address, amount: i128) -> i128;

    /// Reward claimable by `position`, in base tokens
    fn pending_reward(e: Env, position: Address) -> i128;

    /// Transfer the reward accrued by `caller` to it
    ///
    /// Returns the amount of base tokens claimed
    fn claim(e: Env, caller: Address) -> i128;
}
