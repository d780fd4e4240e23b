//! Login stub over the identity store.
//!
//! Any non-blank email/password pair logs in. The password is checked for
//! presence only and is never persisted.

use crate::model::identity::Identity;
use crate::repo::identity_repo::IdentityStore;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{debug, info};

/// Tracks the current identity and mirrors it to storage.
pub struct AuthService<S: KeyValueStore> {
    store: IdentityStore<S>,
    current: Option<Identity>,
}

impl<S: KeyValueStore> AuthService<S> {
    /// Restores whatever identity was persisted by an earlier session.
    pub fn load(store: S) -> Self {
        let store = IdentityStore::new(store);
        let current = store.load();
        info!(
            "event=auth_restore module=auth status=ok logged_in={}",
            current.is_some()
        );
        Self { store, current }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Logs in with trimmed credentials.
    ///
    /// Returns `Ok(None)` without touching storage when either field is blank.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<Option<Identity>> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            debug!("event=auth_login module=auth status=rejected reason=blank_credentials");
            return Ok(None);
        }

        let identity = Identity::new(email);
        self.store.save(&identity)?;
        self.current = Some(identity.clone());
        info!("event=auth_login module=auth status=ok");
        Ok(Some(identity))
    }

    /// Forgets the current identity. Safe to call when logged out.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.store.clear()?;
        self.current = None;
        info!("event=auth_logout module=auth status=ok");
        Ok(())
    }
}
