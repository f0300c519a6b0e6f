#![no_std]

mod events;
mod ownable;
mod storage;
mod upgrade;
mod validation;

#[cfg(test)]
extern crate std;


use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

pub use pink_salt_token_interface::{MarketFeeds, TokenError, TreasuryWallets};

use events::TokenEvents;

/// Decimal places advertised in the token metadata.
pub const DECIMALS: u32 = 18;

#[contract]
pub struct PinkSaltToken;

#[contractimpl]
impl PinkSaltToken {
    /// One-shot setup used in place of a constructor.
    ///
    /// `wallets.deployment_wallet` must authorize the call and becomes the
    /// owner. Every argument is validated before anything is written, so a
    /// rejected call leaves the instance uninitialized.
    pub fn initialize(
        env: Env,
        name: String,
        symbol: String,
        wallets: TreasuryWallets,
        feeds: MarketFeeds,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        let owner = wallets.deployment_wallet.clone();
        owner.require_auth();

        validation::check_identity(&name, &symbol)?;
        validation::check_wallets(&env, &wallets)?;
        validation::check_feeds(&env, &feeds)?;

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: DECIMALS,
            name: name.clone(),
            symbol: symbol.clone(),
        });
        storage::set_wallets(&env, &wallets);
        storage::set_feeds(&env, &feeds);
        storage::set_owner(&env, &owner);
        storage::set_sale_enabled(&env, false);
        storage::set_version(&env, 1);
        storage::set_initialized(&env);
        storage::extend_instance_ttl(&env);

        TokenEvents::initialized(&env, &owner, &name, &symbol);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        storage::get_owner(&env).ok_or(TokenError::NotInitialized)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        ownable::transfer_ownership(&env, &caller, &new_owner)
    }

    /// Opens the sale. Owner only; calling it again once the sale is open
    /// succeeds without side effects.
    pub fn enable_sale(env: Env, caller: Address) -> Result<(), TokenError> {
        ownable::require_owner(&env, &caller)?;

        if storage::get_sale_enabled(&env) {
            return Ok(());
        }

        storage::set_sale_enabled(&env, true);
        storage::extend_instance_ttl(&env);
        TokenEvents::sale_enabled(&env, &caller);
        Ok(())
    }

    pub fn sale_enabled(env: Env) -> bool {
        storage::get_sale_enabled(&env)
    }

    /// Replaces the contract code, keeping all storage. Owner only.
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), TokenError> {
        ownable::require_owner(&env, &caller)?;
        upgrade::execute_upgrade(&env, new_wasm_hash)?;
        Ok(())
    }

    pub fn version(env: Env) -> Result<u32, TokenError> {
        storage::get_version(&env).ok_or(TokenError::NotInitialized)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Self::metadata(&env).map(|m| m.decimal)
    }

    pub fn treasury_wallets(env: Env) -> Result<TreasuryWallets, TokenError> {
        storage::get_wallets(&env).ok_or(TokenError::NotInitialized)
    }

    pub fn market_feeds(env: Env) -> Result<MarketFeeds, TokenError> {
        storage::get_feeds(&env).ok_or(TokenError::NotInitialized)
    }
}

impl PinkSaltToken {
    fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        if !storage::is_initialized(env) {
            return Err(TokenError::NotInitialized);
        }
        Ok(TokenUtils::new(env).metadata().get_metadata())
    }
}
