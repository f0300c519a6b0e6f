use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits an `init` event once the token is configured.
    ///
    /// Topics: `("init", owner)`
    /// Data:   `(name, symbol)`
    pub fn initialized(env: &Env, owner: &Address, name: &String, symbol: &String) {
        env.events().publish((symbol_short!("init"), owner), (name.clone(), symbol.clone()));
    }

    /// Topics: `("sale_on",)`, data: the owner that opened the sale.
    pub fn sale_enabled(env: &Env, caller: &Address) {
        env.events().publish((symbol_short!("sale_on"),), caller.clone());
    }

    pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
        env.events().publish((symbol_short!("owner"), previous_owner), new_owner.clone());
    }

    pub fn upgraded(env: &Env, new_wasm_hash: &BytesN<32>, version: u32) {
        env.events().publish((symbol_short!("upgrade"),), (new_wasm_hash.clone(), version));
    }
}
