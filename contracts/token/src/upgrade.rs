use soroban_sdk::{BytesN, Env};

use crate::{events::TokenEvents, storage, TokenError};

/// Swaps the contract code for `new_wasm_hash` in place and bumps the
/// implementation version. Storage is carried over untouched; the new
/// code takes effect from the next invocation.
///
/// The caller must already have passed the ownership guard.
pub fn execute_upgrade(env: &Env, new_wasm_hash: BytesN<32>) -> Result<u32, TokenError> {
    let version = storage::get_version(env).ok_or(TokenError::NotInitialized)?.saturating_add(1);

    env.deployer().update_current_contract_wasm(new_wasm_hash.clone());
    storage::set_version(env, version);
    storage::extend_instance_ttl(env);

    TokenEvents::upgraded(env, &new_wasm_hash, version);
    Ok(version)
}
