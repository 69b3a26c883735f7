//! Platform key-value store for the cart snapshot.
//! Browser: `window.localStorage`. Desktop: JSON files in the data dir (in-memory if that fails).

use crate::config::AppConfig;
use festbook_cart_core::{CartService, KeyValueStore, StorageResult};

pub type Cart = CartService<PlatformStore>;

/// Open the session's cart, hydrated from whatever the platform has persisted.
pub fn open_cart(config: &AppConfig) -> Cart {
    CartService::open(PlatformStore::open(config))
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore as PlatformStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use festbook_cart_core::StorageError;

    /// localStorage, looked up on every call; private browsing may take it away.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        pub fn open(_config: &AppConfig) -> Self {
            BrowserStore
        }

        fn storage() -> StorageResult<web_sys::Storage> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn remove(&mut self, key: &str) -> StorageResult<()> {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopStore as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use super::*;
    use festbook_cart_core::{FileStore, MemoryStore};

    #[derive(Clone, Debug)]
    pub enum DesktopStore {
        File(FileStore),
        /// Data dir unusable; the cart lives for this session only.
        Memory(MemoryStore),
    }

    impl DesktopStore {
        pub fn open(config: &AppConfig) -> Self {
            match FileStore::open(&config.data_dir) {
                Ok(store) => DesktopStore::File(store),
                Err(e) => {
                    tracing::warn!(
                        dir = %config.data_dir.display(),
                        error = %e,
                        "data dir unavailable, cart will not be persisted"
                    );
                    DesktopStore::Memory(MemoryStore::new())
                }
            }
        }
    }

    impl KeyValueStore for DesktopStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            match self {
                DesktopStore::File(s) => s.get(key),
                DesktopStore::Memory(s) => s.get(key),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
            match self {
                DesktopStore::File(s) => s.set(key, value),
                DesktopStore::Memory(s) => s.set(key, value),
            }
        }

        fn remove(&mut self, key: &str) -> StorageResult<()> {
            match self {
                DesktopStore::File(s) => s.remove(key),
                DesktopStore::Memory(s) => s.remove(key),
            }
        }
    }
}
