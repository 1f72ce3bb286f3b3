extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Env,
};

use crate::{RoleAccess, RoleAccessClient};

pub struct TestContext {
    pub env: Env,
    pub client: RoleAccessClient<'static>,
    pub admin: Address,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Initialize ledger with a standard timestamp
        env.ledger().set(LedgerInfo {
            timestamp: 100_000,
            protocol_version: 22,
            sequence_number: 100,
            network_id: [0u8; 32],
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 1000,
        });

        let contract_id = env.register(RoleAccess, ());
        let client = RoleAccessClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize(&admin);

        Self { env, client, admin }
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }
}
