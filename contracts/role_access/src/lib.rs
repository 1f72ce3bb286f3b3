//! # RoleAccess Contract
//!
//! Single source of truth for "who may do what" on the DeFundMe platform.
//! Membership is a flat set: a principal may hold several independent roles
//! at once, and there is no role hierarchy.
//!
//! | Phase        | Entry Point(s)                               |
//! |--------------|----------------------------------------------|
//! | Bootstrap    | [`RoleAccess::initialize`]                   |
//! | Role admin   | `grant_role`, `revoke_role`                  |
//! | Wiring       | `register_module`, `get_module`, `is_registered_peer` |
//! | Queries      | `has_role`                                   |
//!
//! Instances are created by external deployment tooling and initialized
//! exactly once afterwards; the initializing principal becomes the first
//! `Admin`. Wiring to the project ledger happens through [`module_link`]
//! after both contracts exist.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

pub mod events;
pub mod rbac;

#[cfg(test)]
mod test_module;
#[cfg(test)]
mod test_utils;

pub use rbac::Role;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidAddress = 3,
    ModuleAlreadyRegistered = 4,
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
pub struct RoleAccess;

#[contractimpl]
impl RoleAccess {
    // ─── Initialisation ─────────────────────────────────────────────

    /// Initialize the registry and grant `admin` the `Admin` role.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        rbac::init_admin(&env, &admin)?;
        events::emit_initialized(&env, admin);
        Ok(())
    }

    // ─── Role management ────────────────────────────────────────────

    /// Grant `role` to `target`.
    ///
    /// `caller` must authenticate and hold `Admin`. Granting a role the
    /// target already holds succeeds without effect.
    pub fn grant_role(env: Env, caller: Address, target: Address, role: Role) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        rbac::grant(&env, &target, role);
        events::emit_role_granted(&env, role, target, caller);
        Ok(())
    }

    /// Revoke `role` from `target`.
    ///
    /// `caller` must authenticate and hold `Admin`. Revoking a role the
    /// target does not hold succeeds without effect.
    pub fn revoke_role(env: Env, caller: Address, target: Address, role: Role) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        rbac::revoke(&env, &target, role);
        events::emit_role_revoked(&env, role, target, caller);
        Ok(())
    }

    /// Return `true` if `address` holds `role`. Pure read, never fails.
    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        rbac::has_role(&env, &address, role)
    }

    // ─── Module wiring ──────────────────────────────────────────────

    /// Record the project ledger contract as this registry's trusted peer.
    ///
    /// `caller` must authenticate and hold `Admin`. Write-once: a second
    /// registration fails with `Error::ModuleAlreadyRegistered`.
    pub fn register_module(env: Env, caller: Address, peer: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        module_link::register(&env, &peer)?;
        events::emit_module_registered(&env, peer);
        Ok(())
    }

    /// The registered peer contract, if wiring has completed.
    pub fn get_module(env: Env) -> Option<Address> {
        module_link::peer(&env)
    }

    /// `true` iff wiring has completed and `address` is the registered peer.
    pub fn is_registered_peer(env: Env, address: Address) -> bool {
        module_link::is_registered_peer(&env, &address)
    }
}
