use pink_salt_token_interface::{MarketFeeds, TreasuryWallets};
use soroban_sdk::{Address, Env, String};

use crate::TokenError;

/// Strkey of the all-zero ed25519 account. Nobody holds its key, so any
/// funds routed there are burned.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

/// Rejects the zero account and the token's own address.
pub fn check_address(env: &Env, address: &Address) -> Result<(), TokenError> {
    if *address == zero_account(env) || *address == env.current_contract_address() {
        return Err(TokenError::InvalidArgument);
    }
    Ok(())
}

pub fn check_identity(name: &String, symbol: &String) -> Result<(), TokenError> {
    if name.len() == 0 || symbol.len() == 0 {
        return Err(TokenError::InvalidArgument);
    }
    Ok(())
}

pub fn check_wallets(env: &Env, wallets: &TreasuryWallets) -> Result<(), TokenError> {
    for wallet in [
        &wallets.salt_fee_wallet,
        &wallets.founders_wallet,
        &wallets.public_trade_wallet,
        &wallets.airdrop_wallet,
        &wallets.development_wallet,
        &wallets.reward_wallet,
        &wallets.deployment_wallet,
    ] {
        check_address(env, wallet)?;
    }
    Ok(())
}

pub fn check_feeds(env: &Env, feeds: &MarketFeeds) -> Result<(), TokenError> {
    for feed in [&feeds.price_feed_bnb, &feeds.price_feed_psc, &feeds.uniswap_router] {
        check_address(env, feed)?;
    }
    Ok(())
}
