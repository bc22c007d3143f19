use crate::models::AppState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;
use tracing::{debug, error, warn};

pub const STATE_KEY: &str = "dailyCatState";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{backend} storage is unavailable")]
    Unavailable { backend: &'static str },
    #[error("{backend} storage I/O failed: {source}")]
    Io {
        backend: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no storage backend accepted the write")]
    AllFailed,
}

/// A key/value slot the persistence adapter can write state into.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn is_available(&self) -> bool;

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
pub struct FileBackend {
    name: &'static str,
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(name: &'static str, dir: impl Into<PathBuf>) -> Self {
        Self {
            name,
            dir: dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            backend: self.name,
            source,
        }
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn is_available(&self) -> bool {
        match fs::create_dir_all(&self.dir).await {
            Ok(()) => true,
            Err(err) => {
                debug!(backend = self.name, dir = %self.dir.display(), "storage unavailable: {err}");
                false
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await.map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &path).await.map_err(|err| self.io_error(err))
    }
}

/// Process-lifetime storage. Always available.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable { backend: "memory" })?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable { backend: "memory" })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the app state across an ordered list of backends, most durable first.
pub struct PersistenceAdapter {
    backends: Vec<Box<dyn StorageBackend>>,
    key: String,
}

impl PersistenceAdapter {
    pub fn new(backends: Vec<Box<dyn StorageBackend>>) -> Self {
        Self {
            backends,
            key: STATE_KEY.to_string(),
        }
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|backend| backend.name()).collect()
    }

    /// Writes to every available backend. Fails only when none accepted the write.
    pub async fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let payload = serde_json::to_string_pretty(state)?;
        let mut written = 0usize;

        for backend in &self.backends {
            if !backend.is_available().await {
                continue;
            }
            match backend.set(&self.key, &payload).await {
                Ok(()) => written += 1,
                Err(err) => warn!(backend = backend.name(), "failed to save state: {err}"),
            }
        }

        if written == 0 {
            error!("state was not saved to any backend");
            return Err(StorageError::AllFailed);
        }
        Ok(())
    }

    /// Returns the first stored state that parses, in backend order.
    pub async fn load(&self) -> Option<AppState> {
        for backend in &self.backends {
            if !backend.is_available().await {
                continue;
            }
            let raw = match backend.get(&self.key).await {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(err) => {
                    warn!(backend = backend.name(), "failed to read state: {err}");
                    continue;
                }
            };
            match serde_json::from_str::<AppState>(&raw) {
                Ok(state) => {
                    debug!(backend = backend.name(), "loaded state");
                    return Some(state);
                }
                Err(err) => error!(backend = backend.name(), "failed to parse stored state: {err}"),
            }
        }
        None
    }
}
