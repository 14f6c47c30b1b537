pub mod bidding_test;

use crate::{EscrowAuction, EscrowAuctionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const DURATION: u64 = 3600;

pub fn setup_test() -> (
    Env,
    EscrowAuctionClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(EscrowAuction, ());
    let client = EscrowAuctionClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&alice, &1_000_000);
    token_admin_client.mint(&bob, &1_000_000);

    client.initialize(&owner, &token_address, &DURATION);

    (env, client, owner, alice, bob, token_client)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
