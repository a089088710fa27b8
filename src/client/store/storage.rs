use std::{cell::RefCell, rc::Rc};

use crate::client::error::StorageError;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Persistent home of the session token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Token storage kept in memory.
///
/// Clones share the same slot, so a test can keep a handle and inspect what a
/// [`Session`](super::session::Session) wrote. Also used on targets without
/// browser storage, where sessions last until the app closes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage(Rc<RefCell<Option<String>>>);

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self(Rc::new(RefCell::new(Some(token.to_string()))))
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.0.borrow_mut() = Some(token.to_string());

        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.0.borrow_mut().take();

        Ok(())
    }
}

/// Token storage backed by the browser's `localStorage`.
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "web")]
impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;

        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;

        storage
            .remove_item(TOKEN_KEY)
            .map_err(|e| StorageError::Remove(format!("{:?}", e)))
    }
}

/// Storage used by the running app for this build's platform.
pub fn platform_storage() -> Rc<dyn TokenStorage> {
    #[cfg(feature = "web")]
    {
        Rc::new(BrowserStorage)
    }

    #[cfg(not(feature = "web"))]
    {
        Rc::new(MemoryStorage::default())
    }
}
