//! Storage for the access and refresh tokens.
//!
//! In the browser both tokens live in `localStorage` under the keys `token` and `refreshToken`,
//! elsewhere they are kept in memory for the lifetime of the process.

use std::sync::RwLock;

use crate::model::auth::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Where the session tokens are kept
///
/// Only login, the refresh flow and logout write to the store.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn set_refresh_token(&self, token: &str);
    fn clear(&self);

    fn set_tokens(&self, tokens: &TokenPair) {
        self.set_access_token(&tokens.token);
        self.set_refresh_token(&tokens.refresh_token);
    }

    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    access: RwLock<Option<String>>,
    refresh: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        Self {
            access: RwLock::new(Some(access.to_string())),
            refresh: RwLock::new(Some(refresh.to_string())),
        }
    }
}

fn read(slot: &RwLock<Option<String>>) -> Option<String> {
    slot.read().unwrap_or_else(|e| e.into_inner()).clone()
}

fn write(slot: &RwLock<Option<String>>, value: Option<String>) {
    *slot.write().unwrap_or_else(|e| e.into_inner()) = value;
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        read(&self.access)
    }

    fn refresh_token(&self) -> Option<String> {
        read(&self.refresh)
    }

    fn set_access_token(&self, token: &str) {
        write(&self.access, Some(token.to_string()));
    }

    fn set_refresh_token(&self, token: &str) {
        write(&self.refresh, Some(token.to_string()));
    }

    fn clear(&self) {
        write(&self.access, None);
        write(&self.refresh, None);
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::local_storage::LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use dioxus_logger::tracing;
    use web_sys::Storage;

    use super::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

    /// Token store backed by the browser's `localStorage`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageTokenStore;

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn get(key: &str) -> Option<String> {
        storage()?
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    }

    fn set(key: &str, value: &str) {
        let Some(storage) = storage() else {
            tracing::warn!("localStorage unavailable, {} not persisted", key);
            return;
        };

        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to localStorage", key);
        }
    }

    fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }

    impl TokenStore for LocalStorageTokenStore {
        fn access_token(&self) -> Option<String> {
            get(ACCESS_TOKEN_KEY)
        }

        fn refresh_token(&self) -> Option<String> {
            get(REFRESH_TOKEN_KEY)
        }

        fn set_access_token(&self, token: &str) {
            set(ACCESS_TOKEN_KEY, token);
        }

        fn set_refresh_token(&self, token: &str) {
            set(REFRESH_TOKEN_KEY, token);
        }

        fn clear(&self) {
            remove(ACCESS_TOKEN_KEY);
            remove(REFRESH_TOKEN_KEY);
        }
    }
}
