//! Role membership storage and guards.
//!
//! Membership is stored as one instance-storage entry per `(role, principal)`
//! pair, so a principal may hold any combination of roles. The `Initialized`
//! flag is set once by [`init_admin`] and never cleared.

use soroban_sdk::{contracttype, Address, Env};

use crate::Error;

/// Named capabilities grantable to principals.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// Administrative role: manages roles, wires modules, creates projects.
    Admin,
    /// Operational role for project curation, grantable independently.
    ProjectManager,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum RbacKey {
    Initialized,
    Member(Role, Address),
}

/// One-time bootstrap: mark the registry initialized and grant `admin`
/// the `Admin` role.
pub fn init_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    if env.storage().instance().has(&RbacKey::Initialized) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&RbacKey::Initialized, &true);
    env.storage()
        .instance()
        .set(&RbacKey::Member(Role::Admin, admin.clone()), &true);
    Ok(())
}

pub fn grant(env: &Env, target: &Address, role: Role) {
    env.storage()
        .instance()
        .set(&RbacKey::Member(role, target.clone()), &true);
}

pub fn revoke(env: &Env, target: &Address, role: Role) {
    env.storage()
        .instance()
        .remove(&RbacKey::Member(role, target.clone()));
}

pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    env.storage()
        .instance()
        .has(&RbacKey::Member(role, address.clone()))
}

/// Guard for administrative entry points.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if !has_role(env, caller, Role::Admin) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
