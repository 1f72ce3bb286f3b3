use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::Role;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitialized {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGranted {
    pub role: Role,
    pub target: Address,
    pub granted_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevoked {
    pub role: Role,
    pub target: Address,
    pub revoked_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleRegistered {
    pub peer: Address,
}

pub fn emit_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, RegistryInitialized { admin });
}

pub fn emit_role_granted(env: &Env, role: Role, target: Address, granted_by: Address) {
    let topics = (symbol_short!("granted"), target.clone());
    let data = RoleGranted {
        role,
        target,
        granted_by,
    };
    env.events().publish(topics, data);
}

pub fn emit_role_revoked(env: &Env, role: Role, target: Address, revoked_by: Address) {
    let topics = (symbol_short!("revoked"), target.clone());
    let data = RoleRevoked {
        role,
        target,
        revoked_by,
    };
    env.events().publish(topics, data);
}

pub fn emit_module_registered(env: &Env, peer: Address) {
    let topics = (symbol_short!("module"),);
    env.events().publish(topics, ModuleRegistered { peer });
}
