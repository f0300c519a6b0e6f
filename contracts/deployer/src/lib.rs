#![no_std]

mod errors;
mod events;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use pink_salt_token_interface::{MarketFeeds, PinkSaltTokenClient, TreasuryWallets};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String};

pub use errors::DeployerError;

use events::DeployerEvents;
use storage::DeployerStorage;

/// Deploys Pink Salt Token instances and initializes each one in the same
/// invocation, so no third party can call the initializer first.
#[contract]
pub struct Deployer;

#[contractimpl]
impl Deployer {
    pub fn initialize(
        env: Env,
        admin: Address,
        token_wasm_hash: BytesN<32>,
    ) -> Result<(), DeployerError> {
        if storage::has_deployer_storage(&env) {
            return Err(DeployerError::AlreadyInitialized);
        }
        admin.require_auth();

        let storage = DeployerStorage { admin, token_wasm_hash, deployment_count: 0 };

        storage::set_deployer_storage(&env, &storage);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Points future deployments at new token code. Admin only; tokens
    /// already deployed are upgraded by their own owners.
    pub fn set_token_wasm_hash(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), DeployerError> {
        let mut storage =
            storage::get_deployer_storage(&env).ok_or(DeployerError::NotInitialized)?;
        storage.admin.require_auth();

        storage.token_wasm_hash = new_wasm_hash.clone();
        storage::set_deployer_storage(&env, &storage);
        storage::extend_instance_ttl(&env);
        DeployerEvents::wasm_hash_set(&env, &new_wasm_hash);
        Ok(())
    }

    /// Deploys and initializes a token owned by `wallets.deployment_wallet`.
    pub fn deploy(
        env: Env,
        name: String,
        symbol: String,
        wallets: TreasuryWallets,
        feeds: MarketFeeds,
    ) -> Result<Address, DeployerError> {
        let mut deployer_storage =
            storage::get_deployer_storage(&env).ok_or(DeployerError::NotInitialized)?;

        let owner = wallets.deployment_wallet.clone();
        owner.require_auth();

        if storage::get_token(&env, owner.clone(), symbol.clone()).is_some() {
            return Err(DeployerError::TokenExists);
        }

        // 1. Deploy under a salt derived from (owner, symbol)
        let token_address = env
            .deployer()
            .with_current_contract(token_salt(&env, &owner, &symbol))
            .deploy(deployer_storage.token_wasm_hash.clone());

        // 2. Initialize before anyone else can reach it
        PinkSaltTokenClient::new(&env, &token_address).initialize(
            &name,
            &symbol,
            &wallets,
            &feeds,
        );

        // 3. Record
        record_deployment(&env, &mut deployer_storage, &owner, &symbol, &token_address);
        Ok(token_address)
    }

    /// Address `deploy` will use for this owner and symbol.
    pub fn deployed_address(env: Env, owner: Address, symbol: String) -> Address {
        env.deployer().with_current_contract(token_salt(&env, &owner, &symbol)).deployed_address()
    }

    pub fn get_token(env: Env, owner: Address, symbol: String) -> Option<Address> {
        storage::get_token(&env, owner, symbol)
    }

    pub fn deployment_count(env: Env) -> u32 {
        storage::get_deployer_storage(&env).map(|s| s.deployment_count).unwrap_or(0)
    }

    pub fn admin(env: Env) -> Result<Address, DeployerError> {
        storage::get_deployer_storage(&env).map(|s| s.admin).ok_or(DeployerError::NotInitialized)
    }

    pub fn token_wasm_hash(env: Env) -> Result<BytesN<32>, DeployerError> {
        storage::get_deployer_storage(&env)
            .map(|s| s.token_wasm_hash)
            .ok_or(DeployerError::NotInitialized)
    }
}

/// Registers `token` under `(owner, symbol)` and bumps the deployment count.
fn record_deployment(
    env: &Env,
    deployer_storage: &mut DeployerStorage,
    owner: &Address,
    symbol: &String,
    token: &Address,
) {
    storage::set_token(env, owner.clone(), symbol.clone(), token);
    deployer_storage.deployment_count += 1;
    storage::set_deployer_storage(env, deployer_storage);
    storage::extend_instance_ttl(env);

    DeployerEvents::token_deployed(env, owner, symbol, token);
}

fn token_salt(env: &Env, owner: &Address, symbol: &String) -> BytesN<32> {
    let mut salt_data = Bytes::new(env);
    salt_data.append(&owner.clone().to_xdr(env));
    salt_data.append(&symbol.clone().to_xdr(env));
    env.crypto().sha256(&salt_data).into()
}
