//! Client-side session state: the bearer credential and its storage tiers

mod credential;
mod store;

pub use credential::{
    CREDENTIAL_KEY, CredentialStore, LEGACY_CREDENTIAL_KEY, SESSION_DIR_ENV, StorageTier,
    TokenClaims, session_dir,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
