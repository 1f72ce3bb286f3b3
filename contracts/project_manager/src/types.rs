//! Shared data structures of the project ledger.
//!
//! A project is stored as two ledger entries: [`ProjectConfig`] is written
//! once at creation and never mutated, [`ProjectState`] is rewritten on
//! every contribution, withdrawal, and refund. The public API exposes the
//! reconstructed [`Project`] struct. Closure is a state flag, never a
//! deletion, so the full project history stays queryable.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectStatus {
    /// Accepting contributions until the deadline.
    Funding,
    /// Finalized; funds withdrawn by the creator.
    Closed,
}

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub deadline: u64,
    /// Permit withdrawal even when the goal was not reached.
    pub flexible_funding: bool,
}

/// Mutable project state, updated on contributions and finalization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub amount_raised: i128,
    pub status: ProjectStatus,
}

/// Full representation of a funding project.
///
/// Public API return type; reconstructed from the split
/// `ProjectConfig` + `ProjectState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Unique identifier, sequential from 0.
    pub id: u64,
    /// Principal that created the project and receives funds.
    pub creator: Address,
    pub title: String,
    pub description: String,
    /// Target funding amount in the platform funding asset.
    pub goal: i128,
    /// Running total of accepted contributions.
    pub amount_raised: i128,
    /// Ledger timestamp after which contributions are rejected.
    pub deadline: u64,
    pub flexible_funding: bool,
    pub status: ProjectStatus,
}
