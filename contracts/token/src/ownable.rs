use soroban_sdk::{Address, Env};

use crate::{events::TokenEvents, storage, validation, TokenError};

/// Requires `caller` to have signed and to be the recorded owner.
///
/// Returns the owner on success. A signed call from anyone else fails with
/// `Unauthorized` before any state is touched.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, TokenError> {
    caller.require_auth();
    let owner = storage::get_owner(env).ok_or(TokenError::NotInitialized)?;
    if *caller != owner {
        return Err(TokenError::Unauthorized);
    }
    Ok(owner)
}

/// Hands the ownership slot to `new_owner`.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), TokenError> {
    let previous_owner = require_owner(env, caller)?;
    validation::check_address(env, new_owner)?;

    storage::set_owner(env, new_owner);
    storage::extend_instance_ttl(env);
    TokenEvents::ownership_transferred(env, &previous_owner, new_owner);
    Ok(())
}
