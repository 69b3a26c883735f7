//! Durable key-value storage and the cart snapshot adapter on top of it.
//!
//! Backends (`MemoryStore`, `FileStore`, the browser's localStorage in the frontend)
//! only move strings around. `CartStore` owns the JSON shape and the fail-soft
//! policy: a corrupt or unreadable snapshot becomes an empty cart, and write
//! failures are logged and dropped.

use crate::error::{StorageError, StorageResult};
use crate::models::CartLineItem;
use crate::totals;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Minimal durable string map, shaped after the browser's localStorage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// In-process store. Clones share the same map, so a clone can stand in for
/// "the same storage after a page reload".
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory. Used by the desktop build.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the storage directory.
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Unavailable(format!("invalid storage key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        std::fs::write(self.path_for(key)?, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        match std::fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads and writes the whole line-item list as one JSON array.
#[derive(Debug)]
pub struct CartStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, CART_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted items, or empty when nothing is stored or the snapshot is unusable.
    pub fn load(&self) -> Vec<CartLineItem> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read cart snapshot, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
            Ok(items) => totals::normalize(items),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to parse cart snapshot, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the snapshot with `items`. Best effort.
    pub fn save(&mut self, items: &[CartLineItem]) {
        if let Err(e) = self.try_save(items) {
            warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }

    /// Drop the persisted snapshot. Best effort.
    pub fn clear(&mut self) {
        if let Err(e) = self.backend.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear persisted cart");
        }
    }

    fn try_save(&mut self, items: &[CartLineItem]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(&self.key, &json)
    }
}
