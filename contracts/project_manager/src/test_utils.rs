extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

use role_access::{RoleAccess, RoleAccessClient};

use crate::{ProjectManager, ProjectManagerClient};

/// Deploys the funding token, the role registry, and the project ledger,
/// then performs the mutual module registration the deployment tooling
/// would do. `admin` holds the `Admin` role in the registry.
pub struct TestContext {
    pub env: Env,
    pub client: ProjectManagerClient<'static>,
    pub registry: RoleAccessClient<'static>,
    pub admin: Address,
    pub token: token::Client<'static>,
    pub sac: token::StellarAssetClient<'static>,
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

        let admin = Address::generate(&env);

        let token_admin = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(token_admin);
        let token = token::Client::new(&env, &asset.address());
        let sac = token::StellarAssetClient::new(&env, &asset.address());

        let registry_id = env.register(RoleAccess, ());
        let registry = RoleAccessClient::new(&env, &registry_id);
        registry.initialize(&admin);

        let ledger_id = env.register(ProjectManager, ());
        let client = ProjectManagerClient::new(&env, &ledger_id);
        client.initialize(&admin, &token.address);

        // Mutual registration, both sides required before any gated call.
        client.register_module(&admin, &registry_id);
        registry.register_module(&admin, &ledger_id);

        Self {
            env,
            client,
            registry,
            admin,
            token,
            sac,
        }
    }

    /// Create a project as `admin` with a one-hour deadline.
    pub fn create_project(&self, goal: i128, flexible_funding: bool) -> u64 {
        self.client.create_project(
            &self.admin,
            &String::from_str(&self.env, "first defundme"),
            &String::from_str(&self.env, "first defundme description"),
            &goal,
            &(self.env.ledger().timestamp() + 3600),
            &flexible_funding,
        )
    }

    /// Mint funding tokens and contribute them to `project_id`.
    pub fn fund(&self, project_id: u64, contributor: &Address, amount: i128) {
        self.sac.mint(contributor, &amount);
        self.client.contribute(&project_id, contributor, &amount);
    }

    pub fn jump_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        self.env.ledger().set(ledger);
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }
}
