//! Persisted logged-in identity.
//!
//! # Invariants
//! - At most one identity is stored, under [`IDENTITY_KEY`].
//! - Loading fails open: any anomaly reads as "logged out".

use crate::model::identity::Identity;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::warn;

/// Storage key of the identity record.
pub const IDENTITY_KEY: &str = "fintrack_user";

/// Owner of the single persisted identity record.
pub struct IdentityStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> IdentityStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the stored identity.
    ///
    /// Returns `None` when nothing is stored, the read fails, or the stored
    /// JSON does not decode.
    pub fn load(&self) -> Option<Identity> {
        let raw = match self.store.get(IDENTITY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("event=identity_load module=identity status=error error_code=read_failed error={err}");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                warn!("event=identity_load module=identity status=error error_code=decode_failed error={err}");
                None
            }
        }
    }

    /// Overwrites the stored identity.
    pub fn save(&self, identity: &Identity) -> StoreResult<()> {
        let raw = serde_json::to_string(identity)?;
        self.store.set(IDENTITY_KEY, &raw)
    }

    /// Removes the stored identity.
    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(IDENTITY_KEY)
    }
}
