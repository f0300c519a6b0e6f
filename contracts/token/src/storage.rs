use pink_salt_token_interface::{MarketFeeds, TreasuryWallets};
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized,
    Owner,
    SaleEnabled,
    Wallets,
    Feeds,
    Version,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_sale_enabled(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::SaleEnabled).unwrap_or(false)
}

pub fn set_sale_enabled(env: &Env, enabled: bool) {
    env.storage().instance().set(&DataKey::SaleEnabled, &enabled);
}

pub fn get_wallets(env: &Env) -> Option<TreasuryWallets> {
    env.storage().instance().get(&DataKey::Wallets)
}

pub fn set_wallets(env: &Env, wallets: &TreasuryWallets) {
    env.storage().instance().set(&DataKey::Wallets, wallets);
}

pub fn get_feeds(env: &Env) -> Option<MarketFeeds> {
    env.storage().instance().get(&DataKey::Feeds)
}

pub fn set_feeds(env: &Env, feeds: &MarketFeeds) {
    env.storage().instance().set(&DataKey::Feeds, feeds);
}

pub fn get_version(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::Version)
}

pub fn set_version(env: &Env, version: u32) {
    env.storage().instance().set(&DataKey::Version, &version);
}

/// Extend instance storage TTL to keep the token alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
