use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::StorageError;

/// Raw key-value persistence. Implementations report failures; [`Storage`]
/// turns them into defaults.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn write(&self, key: &str, value: Value) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Typed facade with fallback-on-error semantics.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.read(key) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(v) => v,
                Err(e) => {
                    warn!(error = %e, key, "stored value has unexpected shape, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                warn!(error = %e, key, "failed to read from storage");
                default
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_value(value)
            .map_err(StorageError::from)
            .and_then(|v| self.backend.write(key, v));
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, key, "failed to write to storage");
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.backend.delete(key) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, key, "failed to remove from storage");
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to clear storage");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<HashMap<String, Value>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(inner.get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        inner.insert(key.to_owned(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        inner.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        inner.clear();
        Ok(())
    }
}

/// A single JSON object on disk, rewritten atomically on every change.
#[derive(Debug)]
pub struct JsonFileStorage {
    inner: RwLock<HashMap<String, Value>>,
    path: PathBuf,
}

impl JsonFileStorage {
    /// Opens `path`, falling back to the `.json.tmp` sibling when the main
    /// file is corrupt and to an empty store when neither parses.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, Value>>(&bytes) {
                Ok(v) => v,
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "failed to parse storage file, trying tmp fallback");
                    std::fs::read(path.with_extension("json.tmp"))
                        .ok()
                        .and_then(|tmp| serde_json::from_slice::<HashMap<String, Value>>(&tmp).ok())
                        .unwrap_or_default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no storage file yet");
                HashMap::new()
            }
        };
        Self {
            inner: RwLock::new(data),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, data: &HashMap<String, Value>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(data)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn mutate(&self, f: impl FnOnce(&mut HashMap<String, Value>)) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        f(&mut *inner);
        self.persist(&*inner)
    }
}

impl StorageBackend for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let inner = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(inner.get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.mutate(|data| {
            data.insert(key.to_owned(), value);
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.mutate(|data| {
            data.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.mutate(HashMap::clear)
    }
}
