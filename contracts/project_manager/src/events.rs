use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitialized {
    pub admin: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleRegistered {
    pub peer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub creator: Address,
    pub title: String,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub project_id: u64,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRefunded {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, admin: Address, token: Address) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, LedgerInitialized { admin, token });
}

pub fn emit_module_registered(env: &Env, peer: Address) {
    let topics = (symbol_short!("module"),);
    env.events().publish(topics, ModuleRegistered { peer });
}

pub fn emit_project_created(
    env: &Env,
    project_id: u64,
    creator: Address,
    title: String,
    goal: i128,
    deadline: u64,
) {
    let topics = (symbol_short!("created"), project_id);
    let data = ProjectCreated {
        project_id,
        creator,
        title,
        goal,
        deadline,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution(env: &Env, project_id: u64, contributor: Address, amount: i128) {
    let topics = (symbol_short!("funded"), project_id);
    let data = ContributionReceived {
        project_id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, project_id: u64, creator: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), project_id);
    let data = FundsWithdrawn {
        project_id,
        creator,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_refunded(env: &Env, project_id: u64, contributor: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), project_id);
    let data = ContributionRefunded {
        project_id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}
