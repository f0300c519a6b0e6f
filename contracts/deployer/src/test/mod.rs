#![cfg(test)]

use soroban_sdk::Env;

mod deployer_tests {
    use super::*;
    use crate::{record_deployment, storage, Deployer, DeployerClient, DeployerError};
    use pink_salt_token_interface::{MarketFeeds, TreasuryWallets};
    use soroban_sdk::{
        symbol_short,
        testutils::{Address as _, Events as _},
        Address, BytesN, IntoVal, String, Val, Vec,
    };

    fn setup_env<'a>() -> (Env, DeployerClient<'a>, Address, BytesN<32>) {
        let env = Env::default();
        env.mock_all_auths();

        let deployer_address = env.register_contract(None, Deployer);
        let client = DeployerClient::new(&env, &deployer_address);

        let admin = Address::generate(&env);
        let token_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &token_wasm_hash);

        (env, client, admin, token_wasm_hash)
    }

    fn wallets(env: &Env, owner: &Address) -> TreasuryWallets {
        TreasuryWallets {
            salt_fee_wallet: Address::generate(env),
            founders_wallet: Address::generate(env),
            public_trade_wallet: Address::generate(env),
            airdrop_wallet: Address::generate(env),
            development_wallet: Address::generate(env),
            reward_wallet: Address::generate(env),
            deployment_wallet: owner.clone(),
        }
    }

    fn feeds(env: &Env) -> MarketFeeds {
        MarketFeeds {
            price_feed_bnb: Address::generate(env),
            price_feed_psc: Address::generate(env),
            uniswap_router: Address::generate(env),
        }
    }

    // ---------- Initialization ----------

    #[test]
    fn test_initialize_happy_path() {
        let (_env, client, admin, token_wasm_hash) = setup_env();

        assert_eq!(client.admin(), admin);
        assert_eq!(client.token_wasm_hash(), token_wasm_hash);
        assert_eq!(client.deployment_count(), 0);
    }

    #[test]
    fn test_initialize_requires_admin_signature() {
        let env = Env::default();
        env.mock_all_auths();
        let client = DeployerClient::new(&env, &env.register_contract(None, Deployer));

        let admin = Address::generate(&env);
        client.initialize(&admin, &BytesN::from_array(&env, &[1u8; 32]));

        let auths = env.auths();
        assert_eq!(auths.len(), 1);
        assert_eq!(auths[0].0, admin);
    }

    #[test]
    #[should_panic]
    fn test_initialize_without_admin_signature_panics() {
        let env = Env::default();
        let client = DeployerClient::new(&env, &env.register_contract(None, Deployer));

        client.initialize(&Address::generate(&env), &BytesN::from_array(&env, &[1u8; 32]));
    }

    #[test]
    fn test_initialize_double_init_fails() {
        let (env, client, _, _) = setup_env();

        let other_admin = Address::generate(&env);
        let result = client.try_initialize(&other_admin, &BytesN::from_array(&env, &[2u8; 32]));
        assert_eq!(result, Err(Ok(DeployerError::AlreadyInitialized)));
    }

    #[test]
    fn test_views_before_initialize() {
        let env = Env::default();
        let client = DeployerClient::new(&env, &env.register_contract(None, Deployer));

        assert_eq!(client.try_admin(), Err(Ok(DeployerError::NotInitialized)));
        assert_eq!(client.try_token_wasm_hash(), Err(Ok(DeployerError::NotInitialized)));
        assert_eq!(client.deployment_count(), 0);
    }

    // ---------- Wasm hash management ----------

    #[test]
    fn test_set_token_wasm_hash_by_admin() {
        let (env, client, admin, _) = setup_env();
        let new_hash = BytesN::from_array(&env, &[9u8; 32]);

        client.set_token_wasm_hash(&new_hash);

        let auths = env.auths();
        assert_eq!(auths.len(), 1);
        assert_eq!(auths[0].0, admin);
        assert_eq!(client.token_wasm_hash(), new_hash);
    }

    #[test]
    #[should_panic]
    fn test_set_token_wasm_hash_without_admin_signature_panics() {
        let (env, client, _, _) = setup_env();

        // Drop the mocked signatures.
        env.set_auths(&[]);
        client.set_token_wasm_hash(&BytesN::from_array(&env, &[9u8; 32]));
    }

    // ---------- Deployment ----------

    #[test]
    fn test_deploy_before_initialize_fails() {
        let env = Env::default();
        env.mock_all_auths();
        let client = DeployerClient::new(&env, &env.register_contract(None, Deployer));

        let owner = Address::generate(&env);
        let result = client.try_deploy(
            &String::from_str(&env, "Pink Salt Token"),
            &String::from_str(&env, "PSC"),
            &wallets(&env, &owner),
            &feeds(&env),
        );
        assert_eq!(result, Err(Ok(DeployerError::NotInitialized)));
    }

    #[test]
    fn test_deploy_existing_token_fails() {
        let (env, client, _, _) = setup_env();
        let owner = Address::generate(&env);
        let symbol = String::from_str(&env, "PSC");
        let existing = Address::generate(&env);

        env.as_contract(&client.address, || {
            storage::set_token(&env, owner.clone(), symbol.clone(), &existing);
        });

        let result = client.try_deploy(
            &String::from_str(&env, "Pink Salt Token"),
            &symbol,
            &wallets(&env, &owner),
            &feeds(&env),
        );
        assert_eq!(result, Err(Ok(DeployerError::TokenExists)));
        assert_eq!(client.get_token(&owner, &symbol), Some(existing));
        assert_eq!(client.deployment_count(), 0);
    }

    #[test]
    fn test_record_deployment_registers_token() {
        let (env, client, _, _) = setup_env();
        let owner = Address::generate(&env);
        let symbol = String::from_str(&env, "PSC");
        let token = Address::generate(&env);

        env.as_contract(&client.address, || {
            let mut deployer_storage = storage::get_deployer_storage(&env).unwrap();
            record_deployment(&env, &mut deployer_storage, &owner, &symbol, &token);
        });

        let (emitter, topics, data) = env.events().all().last().unwrap();
        assert_eq!(emitter, client.address);
        let expected: Vec<Val> = (symbol_short!("deployed"), owner.clone()).into_val(&env);
        assert_eq!(topics, expected);
        let (event_symbol, event_token): (String, Address) = data.into_val(&env);
        assert_eq!(event_symbol, symbol);
        assert_eq!(event_token, token);

        assert_eq!(client.get_token(&owner, &symbol), Some(token));
        assert_eq!(client.deployment_count(), 1);

        let key = storage::DataKey::Token(owner, symbol);
        env.as_contract(&client.address, || {
            assert!(env.storage().persistent().has(&key));
            assert!(!env.storage().instance().has(&key));
        });
    }

    #[test]
    fn test_record_deployment_keeps_other_owners_apart() {
        let (env, client, _, _) = setup_env();
        let owner_a = Address::generate(&env);
        let owner_b = Address::generate(&env);
        let symbol = String::from_str(&env, "PSC");
        let token = Address::generate(&env);

        env.as_contract(&client.address, || {
            let mut deployer_storage = storage::get_deployer_storage(&env).unwrap();
            record_deployment(&env, &mut deployer_storage, &owner_a, &symbol, &token);
        });

        assert!(client.get_token(&owner_b, &symbol).is_none());
    }

    #[test]
    fn test_deployed_address_is_deterministic() {
        let (env, client, _, _) = setup_env();
        let owner = Address::generate(&env);
        let symbol = String::from_str(&env, "PSC");

        assert_eq!(client.deployed_address(&owner, &symbol), client.deployed_address(&owner, &symbol));
    }

    #[test]
    fn test_deployed_address_depends_on_owner_and_symbol() {
        let (env, client, _, _) = setup_env();
        let owner_a = Address::generate(&env);
        let owner_b = Address::generate(&env);
        let psc = String::from_str(&env, "PSC");
        let other = String::from_str(&env, "PSC2");

        let base = client.deployed_address(&owner_a, &psc);
        assert_ne!(base, client.deployed_address(&owner_b, &psc));
        assert_ne!(base, client.deployed_address(&owner_a, &other));
    }

    #[test]
    fn test_get_token_none_for_missing() {
        let (env, client, _, _) = setup_env();
        let owner = Address::generate(&env);

        assert!(client.get_token(&owner, &String::from_str(&env, "PSC")).is_none());
    }
}
