#![no_std]

use soroban_sdk::{contractclient, contracterror, contracttype, Address, BytesN, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    InvalidArgument = 402,
    Unauthorized = 403,
}

/// Treasury addresses recorded once at initialization.
///
/// `deployment_wallet` is the account that deploys the token; it becomes
/// the initial owner and must authorize `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryWallets {
    pub salt_fee_wallet: Address,
    pub founders_wallet: Address,
    pub public_trade_wallet: Address,
    pub airdrop_wallet: Address,
    pub development_wallet: Address,
    pub reward_wallet: Address,
    pub deployment_wallet: Address,
}

/// Price oracles and the swap router the token is wired to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketFeeds {
    pub price_feed_bnb: Address,
    pub price_feed_psc: Address,
    pub uniswap_router: Address,
}

/// Call surface of the Pink Salt Token contract.
#[contractclient(name = "PinkSaltTokenClient")]
pub trait PinkSaltTokenInterface {
    fn initialize(
        env: Env,
        name: String,
        symbol: String,
        wallets: TreasuryWallets,
        feeds: MarketFeeds,
    ) -> Result<(), TokenError>;

    fn owner(env: Env) -> Result<Address, TokenError>;
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address)
        -> Result<(), TokenError>;

    fn enable_sale(env: Env, caller: Address) -> Result<(), TokenError>;
    fn sale_enabled(env: Env) -> bool;

    fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), TokenError>;
    fn version(env: Env) -> Result<u32, TokenError>;

    fn name(env: Env) -> Result<String, TokenError>;
    fn symbol(env: Env) -> Result<String, TokenError>;
    fn decimals(env: Env) -> Result<u32, TokenError>;
    fn treasury_wallets(env: Env) -> Result<TreasuryWallets, TokenError>;
    fn market_feeds(env: Env) -> Result<MarketFeeds, TokenError>;
}
