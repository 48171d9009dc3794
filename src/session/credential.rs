//! Bearer credential storage across the durable and session tiers

use std::path::PathBuf;
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::store::{FileStore, KeyValueStore};
use crate::error::Result;

/// Key every write uses
pub const CREDENTIAL_KEY: &str = "jwt_token";

/// Older key still honoured on read so existing sessions keep working
pub const LEGACY_CREDENTIAL_KEY: &str = "token";

const LOOKUP_KEYS: [&str; 2] = [CREDENTIAL_KEY, LEGACY_CREDENTIAL_KEY];

/// Environment variable overriding the session storage directory
pub const SESSION_DIR_ENV: &str = "MEDTRACK_SESSION_DIR";

/// Which storage area a credential was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTier {
    /// Survives restarts ("remember me")
    Durable,
    /// Cleared when the login session ends
    Session,
}

impl std::fmt::Display for StorageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageTier::Durable => write!(f, "durable"),
            StorageTier::Session => write!(f, "session"),
        }
    }
}

/// Holds at most one live credential in one of two storage areas.
///
/// Write paths always clear the area not being written, so a lookup can never
/// see two competing credentials.
#[derive(Clone)]
pub struct CredentialStore {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    /// File-backed store: durable file next to the config, session file in
    /// the runtime directory.
    pub fn from_dirs(config_dir: PathBuf) -> Self {
        Self::new(
            Arc::new(FileStore::new(config_dir.join("credentials.yaml"))),
            Arc::new(FileStore::new(session_dir().join("session.yaml"))),
        )
    }

    /// Current credential and the tier it came from.
    ///
    /// Durable storage wins over session storage; within a tier the canonical
    /// key wins over the legacy one. Unreadable storage counts as empty.
    pub fn lookup_with_tier(&self) -> Option<(String, StorageTier)> {
        let tiers = [
            (&self.durable, StorageTier::Durable),
            (&self.session, StorageTier::Session),
        ];

        for (store, tier) in tiers {
            for key in LOOKUP_KEYS {
                match store.get(key) {
                    Ok(Some(value)) if !value.is_empty() => return Some((value, tier)),
                    Ok(_) => {}
                    Err(e) => log::warn!("Skipping unreadable {} credential storage: {}", tier, e),
                }
            }
        }

        None
    }

    /// Current credential, if any
    pub fn lookup(&self) -> Option<String> {
        self.lookup_with_tier().map(|(value, _)| value)
    }

    /// Derived session flag
    pub fn is_authenticated(&self) -> bool {
        self.lookup().is_some()
    }

    /// Store a freshly issued credential.
    ///
    /// `remember` selects the durable area; otherwise the session area is
    /// used. The other area is always emptied.
    pub fn store_credential(&self, value: &str, remember: bool) -> Result<()> {
        let (target, other) = if remember {
            (&self.durable, &self.session)
        } else {
            (&self.session, &self.durable)
        };

        for key in LOOKUP_KEYS {
            other.remove(key)?;
        }
        target.remove(LEGACY_CREDENTIAL_KEY)?;
        target.set(CREDENTIAL_KEY, value)?;

        log::debug!(
            "Stored credential in {} storage",
            if remember { StorageTier::Durable } else { StorageTier::Session }
        );
        Ok(())
    }

    /// Remove the credential from both areas, whatever their prior state.
    ///
    /// Every area and key is attempted even when one fails; the first
    /// failure is returned afterwards.
    pub fn clear_credential(&self) -> Result<()> {
        let tiers = [
            (&self.durable, StorageTier::Durable),
            (&self.session, StorageTier::Session),
        ];

        let mut first_error = None;
        for (store, tier) in tiers {
            for key in LOOKUP_KEYS {
                if let Err(e) = store.remove(key) {
                    log::warn!("Failed to clear {} credential storage: {}", tier, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Session storage directory: `$MEDTRACK_SESSION_DIR`, then the OS runtime
/// directory, then the temp directory.
pub fn session_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(SESSION_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("medtrack")
}

/// Claims readable from an unverified JWT payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    /// Subject (usually the account email)
    #[serde(default)]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a JWT without verifying it.
    ///
    /// The credential is opaque to the client, so anything that does not look
    /// like a JWT simply yields `None`.
    pub fn peek(token: &str) -> Option<Self> {
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return None,
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }
}
