use std::rc::Rc;

use dioxus_logger::tracing;

use crate::client::{error::StorageError, store::storage::TokenStorage};

/// Client-side authentication state.
///
/// A visitor is authenticated exactly when a token sits in storage. The token is
/// never inspected, validated or refreshed here; it only marks the session.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn TokenStorage>,
    authed: bool,
}

impl Session {
    /// Seed the session from whatever token storage already holds.
    pub fn restore(storage: Rc<dyn TokenStorage>) -> Self {
        let authed = storage.load().is_some();

        Self { storage, authed }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authed
    }

    pub fn token(&self) -> Option<String> {
        self.storage.load()
    }

    /// Persist `token` and mark the session authenticated.
    ///
    /// The session stays unauthenticated if the token could not be stored.
    pub fn establish(&mut self, token: &str) -> Result<(), StorageError> {
        self.storage.save(token)?;
        self.authed = true;

        tracing::info!("Session established");

        Ok(())
    }

    /// Forget the token. Safe to call when already logged out.
    ///
    /// The session is logged out in memory even if storage refuses to drop the
    /// token; the error is logged and returned, and the token left behind
    /// restores the session on the next load.
    pub fn end(&mut self) -> Result<(), StorageError> {
        let was_authed = std::mem::replace(&mut self.authed, false);

        if let Err(err) = self.storage.clear() {
            tracing::error!("Failed to clear session token: {}", err);

            return Err(err);
        }

        if was_authed {
            tracing::info!("Session ended");
        }

        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authed", &self.authed)
            .finish_non_exhaustive()
    }
}
