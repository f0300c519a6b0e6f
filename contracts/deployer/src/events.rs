use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

pub struct DeployerEvents;

impl DeployerEvents {
    /// Topics: `("deployed", owner)`, data: `(symbol, token)`.
    pub fn token_deployed(env: &Env, owner: &Address, symbol: &String, token: &Address) {
        env.events().publish((symbol_short!("deployed"), owner), (symbol.clone(), token.clone()));
    }

    pub fn wasm_hash_set(env: &Env, new_wasm_hash: &BytesN<32>) {
        env.events().publish((symbol_short!("wasm_set"),), new_wasm_hash.clone());
    }
}
