use crate::config::{BackendKind, CatSource, Config};
use crate::fetcher::RemoteCatFetcher;
use crate::picker::{CatPicker, DailyCatPicker, RemoteCatPicker};
use crate::storage::{FileBackend, MemoryBackend, PersistenceAdapter, StorageBackend};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SharedState {
    pub store: Arc<Mutex<PersistenceAdapter>>,
    pub picker: Arc<dyn CatPicker>,
}

impl SharedState {
    pub fn new(store: PersistenceAdapter, picker: Arc<dyn CatPicker>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            picker,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let backends = config
            .storage
            .iter()
            .map(|kind| -> Box<dyn StorageBackend> {
                match kind {
                    BackendKind::Durable => Box::new(FileBackend::new("durable", &config.data_dir)),
                    BackendKind::Session => {
                        Box::new(FileBackend::new("session", &config.session_dir))
                    }
                    BackendKind::Memory => Box::new(MemoryBackend::new()),
                }
            })
            .collect();

        let picker: Arc<dyn CatPicker> = match config.cat_source {
            CatSource::Daily => Arc::new(DailyCatPicker),
            CatSource::Remote => {
                let fetcher = RemoteCatFetcher::new(&config.cat_api_url, config.cat_api_timeout)?;
                Arc::new(RemoteCatPicker::new(fetcher))
            }
        };

        Ok(Self::new(PersistenceAdapter::new(backends), picker))
    }
}
