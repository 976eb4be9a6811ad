use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::{Address, Env};

/// Deploy a Stellar asset contract administered by `admin`
pub fn create_stellar_token<'a>(e: &Env, admin: &Address) -> (Address, MockTokenClient<'a>) {
    let contract_id = e.register_stellar_asset_contract_v2(admin.clone()).address();
    let client = MockTokenClient::new(e, &contract_id);
    (contract_id, client)
}
