use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DeployerError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    TokenExists = 502,
}
