//! # Module Link
//!
//! Mutual peer registration between independently deployed contracts.
//!
//! Each contract embedding this module holds exactly one peer slot. The
//! deployment tooling wires two contracts together by calling each side's
//! `register_module` entry point once, after both instances exist. Until a
//! side's slot is populated, that side must treat every cross-contract
//! interaction as unauthorized — registration and `initialize` are
//! independent preconditions.
//!
//! The slot is write-once: replacing an already-registered peer is rejected
//! rather than silently overwritten.

#![no_std]

use soroban_sdk::{contracttype, Address, Env};

/// Instance-storage key for the peer slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LinkKey {
    Peer,
}

/// Failures of a registration attempt. Embedding contracts map these onto
/// their own `#[contracterror]` codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LinkError {
    /// The candidate peer is the registering contract itself.
    SelfReference,
    /// The peer slot is already populated.
    AlreadyRegistered,
}

/// Record `peer` as this contract's trusted counterpart.
///
/// Write-once: a second call fails with [`LinkError::AlreadyRegistered`].
/// Soroban has no zero address, so the malformed-identity check is a
/// self-reference check instead.
pub fn register(env: &Env, peer: &Address) -> Result<(), LinkError> {
    if *peer == env.current_contract_address() {
        return Err(LinkError::SelfReference);
    }
    if env.storage().instance().has(&LinkKey::Peer) {
        return Err(LinkError::AlreadyRegistered);
    }
    env.storage().instance().set(&LinkKey::Peer, peer);
    Ok(())
}

/// The registered peer, or `None` before registration.
pub fn peer(env: &Env) -> Option<Address> {
    env.storage().instance().get(&LinkKey::Peer)
}

/// `true` once registration has completed.
pub fn is_registered(env: &Env) -> bool {
    env.storage().instance().has(&LinkKey::Peer)
}

/// `true` iff registration has completed and `address` is the stored peer.
pub fn is_registered_peer(env: &Env, address: &Address) -> bool {
    match peer(env) {
        Some(registered) => registered == *address,
        None => false,
    }
}
