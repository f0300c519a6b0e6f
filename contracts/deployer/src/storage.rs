use soroban_sdk::{contracttype, Address, BytesN, Env, String};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const TOKEN_LIFETIME_THRESHOLD: u32 = 120960; // ~7 days in 5s ledgers
const TOKEN_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct DeployerStorage {
    pub admin: Address,
    pub token_wasm_hash: BytesN<32>,
    pub deployment_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Deployer,
    Token(Address, String),
}

pub fn get_deployer_storage(env: &Env) -> Option<DeployerStorage> {
    env.storage().instance().get(&DataKey::Deployer)
}

pub fn set_deployer_storage(env: &Env, storage: &DeployerStorage) {
    env.storage().instance().set(&DataKey::Deployer, storage);
}

pub fn has_deployer_storage(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Deployer)
}

/// Registry entries live in persistent storage, one entry per deployment.
pub fn get_token(env: &Env, owner: Address, symbol: String) -> Option<Address> {
    let key = DataKey::Token(owner, symbol);
    let token = env.storage().persistent().get(&key);
    if token.is_some() {
        env.storage().persistent().extend_ttl(&key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
    }
    token
}

pub fn set_token(env: &Env, owner: Address, symbol: String, token: &Address) {
    let key = DataKey::Token(owner, symbol);
    env.storage().persistent().set(&key, token);
    env.storage().persistent().extend_ttl(&key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep the deployer alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
