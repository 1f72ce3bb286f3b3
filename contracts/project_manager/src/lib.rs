//! # ProjectManager Contract
//!
//! Project lifecycle and fund accounting for the DeFundMe platform, gated
//! by authorization. Every mutating entry point either fully applies its
//! effect or fails with a typed error and no state change.
//!
//! | Phase        | Entry Point(s)                               |
//! |--------------|----------------------------------------------|
//! | Bootstrap    | [`ProjectManager::initialize`]               |
//! | Wiring       | `register_module`, `get_module`, `is_registered_peer` |
//! | Lifecycle    | `create_project`, `finalize_or_withdraw`     |
//! | Funding      | `contribute`, `refund`                       |
//! | Queries      | `get_project_detail`, `get_project_count`    |
//!
//! ## Architecture
//!
//! Authorization for project creation is delegated to the [`role_access`]
//! registry through the peer slot recorded by [`module_link`]: the caller
//! must hold the `Admin` role there. Until `register_module` has completed,
//! the ledger treats every authorization-gated call as unauthorized, even
//! though the contract itself is fully initialized. Storage access is fully
//! delegated to [`storage`]; this file contains only the public entry
//! points and event emissions.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, String};

/// Role registry client: WASM import for wasm32, crate client for host builds.
#[cfg(target_arch = "wasm32")]
mod role_access_import {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/role_access.wasm"
    );
    pub use Client as RoleAccessClient;
}

#[cfg(target_arch = "wasm32")]
use role_access_import::{Role, RoleAccessClient};

#[cfg(not(target_arch = "wasm32"))]
use role_access::{Role, RoleAccessClient};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod test_withdraw;

use storage::get_and_increment_project_id;
use types::ProjectConfig;
pub use types::{Project, ProjectStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidAddress = 3,
    ModuleAlreadyRegistered = 4,
    InvalidGoal = 5,
    InvalidDeadline = 6,
    NotFound = 7,
    InvalidAmount = 8,
    DeadlinePassed = 9,
    ProjectClosed = 10,
    GoalNotMet = 11,
    GoalReached = 12,
    DeadlineNotReached = 13,
    NothingToRefund = 14,
    Overflow = 15,
    NotInitialized = 16,
    FlexibleFunding = 17,
}

impl From<module_link::LinkError> for Error {
    fn from(err: module_link::LinkError) -> Self {
        match err {
            module_link::LinkError::SelfReference => Error::InvalidAddress,
            module_link::LinkError::AlreadyRegistered => Error::ModuleAlreadyRegistered,
        }
    }
}

#[contract]
pub struct ProjectManager;

#[contractimpl]
impl ProjectManager {
    // ─── Initialisation ─────────────────────────────────────────────

    /// Initialize the ledger.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    ///
    /// - `admin` is the principal allowed to wire modules and must sign.
    /// - `token` is the funding asset all projects are denominated in.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        if storage::get_admin(&env).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        events::emit_initialized(&env, admin, token);
        Ok(())
    }

    // ─── Module wiring ──────────────────────────────────────────────

    /// Record the role registry contract as this ledger's trusted peer.
    ///
    /// `caller` must authenticate and be the initialization admin.
    /// Write-once: a second call fails with `Error::ModuleAlreadyRegistered`.
    pub fn register_module(env: Env, caller: Address, peer: Address) -> Result<(), Error> {
        caller.require_auth();
        let admin = storage::get_admin(&env).ok_or(Error::NotInitialized)?;
        if caller != admin {
            return Err(Error::Unauthorized);
        }
        module_link::register(&env, &peer)?;
        events::emit_module_registered(&env, peer);
        Ok(())
    }

    /// The registered role registry, if wiring has completed.
    pub fn get_module(env: Env) -> Option<Address> {
        module_link::peer(&env)
    }

    /// `true` iff wiring has completed and `address` is the registered peer.
    pub fn is_registered_peer(env: Env, address: Address) -> bool {
        module_link::is_registered_peer(&env, &address)
    }

    // ─── Project lifecycle ──────────────────────────────────────────

    /// Create a new funding project and return its sequential ID.
    ///
    /// `creator` must sign and hold the `Admin` role in the linked role
    /// registry. IDs are assigned starting at 0 and only consumed by
    /// successful creations.
    pub fn create_project(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        deadline: u64,
        flexible_funding: bool,
    ) -> Result<u64, Error> {
        creator.require_auth();
        Self::require_admin_role(&env, &creator)?;

        if goal <= 0 {
            return Err(Error::InvalidGoal);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidDeadline);
        }

        let id = get_and_increment_project_id(&env);
        let config = ProjectConfig {
            id,
            creator: creator.clone(),
            title: title.clone(),
            description,
            goal,
            deadline,
            flexible_funding,
        };
        storage::save_new_project(&env, &config);

        events::emit_project_created(&env, id, creator, title, goal, deadline);
        Ok(id)
    }

    /// Return the full project record. Pure read.
    pub fn get_project_detail(env: Env, project_id: u64) -> Result<Project, Error> {
        storage::load_project(&env, project_id).ok_or(Error::NotFound)
    }

    /// Number of projects ever created. IDs range over `0..count`.
    pub fn get_project_count(env: Env) -> u64 {
        storage::project_count(&env)
    }

    // ─── Funding ────────────────────────────────────────────────────

    /// Contribute `amount` of the funding asset to a project.
    ///
    /// Open to any principal; authorization applies only to creation and
    /// administrative operations. The asset moves from the contributor to
    /// the contract, which escrows it until withdrawal or refund.
    pub fn contribute(
        env: Env,
        project_id: u64,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let (config, mut state) =
            storage::load_project_pair(&env, project_id).ok_or(Error::NotFound)?;
        if env.ledger().timestamp() > config.deadline {
            return Err(Error::DeadlinePassed);
        }
        if state.status == ProjectStatus::Closed {
            return Err(Error::ProjectClosed);
        }

        state.amount_raised = state
            .amount_raised
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let total = storage::get_contribution(&env, project_id, &contributor)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        let funding_token = storage::get_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::Client::new(&env, &funding_token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        storage::save_project_state(&env, project_id, &state);
        storage::set_contribution(&env, project_id, &contributor, total);

        events::emit_contribution(&env, project_id, contributor, amount);
        Ok(())
    }

    /// Finalize a project and pay the accumulated funds to its creator.
    ///
    /// `caller` must sign and be the project creator. Requires
    /// `amount_raised >= goal` unless the project was created with
    /// `flexible_funding`. Marks the project `Closed`; closure is a flag,
    /// the record itself is never deleted.
    pub fn finalize_or_withdraw(env: Env, project_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let (config, mut state) =
            storage::load_project_pair(&env, project_id).ok_or(Error::NotFound)?;
        if caller != config.creator {
            return Err(Error::Unauthorized);
        }
        if state.status == ProjectStatus::Closed {
            return Err(Error::ProjectClosed);
        }
        if state.amount_raised < config.goal && !config.flexible_funding {
            return Err(Error::GoalNotMet);
        }

        let amount = state.amount_raised;
        if amount > 0 {
            let funding_token = storage::get_token(&env).ok_or(Error::NotInitialized)?;
            let token_client = token::Client::new(&env, &funding_token);
            token_client.transfer(&env.current_contract_address(), &config.creator, &amount);
        }

        state.status = ProjectStatus::Closed;
        storage::save_project_state(&env, project_id, &state);

        events::emit_withdrawn(&env, project_id, config.creator, amount);
        Ok(())
    }

    /// Return a contributor's recorded total for a failed project.
    ///
    /// Available only on fixed-funding projects, after the deadline, while
    /// the goal is unmet and the creator has not finalized. On a
    /// flexible-funding project the escrow belongs to the creator
    /// regardless of the goal, so refunds are never available. Refunds
    /// decrement `amount_raised`; this is the only path besides withdrawal
    /// by which it may decrease.
    pub fn refund(env: Env, project_id: u64, contributor: Address) -> Result<(), Error> {
        contributor.require_auth();

        let (config, mut state) =
            storage::load_project_pair(&env, project_id).ok_or(Error::NotFound)?;
        if state.status == ProjectStatus::Closed {
            return Err(Error::ProjectClosed);
        }
        if env.ledger().timestamp() <= config.deadline {
            return Err(Error::DeadlineNotReached);
        }
        if config.flexible_funding {
            return Err(Error::FlexibleFunding);
        }
        if state.amount_raised >= config.goal {
            return Err(Error::GoalReached);
        }

        let amount = storage::get_contribution(&env, project_id, &contributor);
        if amount == 0 {
            return Err(Error::NothingToRefund);
        }

        let funding_token = storage::get_token(&env).ok_or(Error::NotInitialized)?;
        let token_client = token::Client::new(&env, &funding_token);
        token_client.transfer(&env.current_contract_address(), &contributor, &amount);

        state.amount_raised -= amount;
        storage::save_project_state(&env, project_id, &state);
        storage::set_contribution(&env, project_id, &contributor, 0);

        events::emit_refunded(&env, project_id, contributor, amount);
        Ok(())
    }

    // ─── Internal Helpers ───────────────────────────────────────────

    /// Consult the linked role registry for the `Admin` role.
    ///
    /// An empty peer slot denies everything: registration and
    /// initialization are independent preconditions for cross-contract
    /// trust.
    fn require_admin_role(env: &Env, principal: &Address) -> Result<(), Error> {
        let registry = module_link::peer(env).ok_or(Error::Unauthorized)?;
        let registry_client = RoleAccessClient::new(env, &registry);
        if !registry_client.has_role(principal, &Role::Admin) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
