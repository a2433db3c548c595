pub mod config;
pub mod confirm;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use std::sync::{Arc, Mutex, PoisonError};
use tokio::task;
use tracing::info;

use config::{StorageBackend, StorageConfig};
use error::StoreError;
use services::session::SeatBookingSession;
use store::{FileStore, KeyValueStore, MemoryStore};

// Shared state для всего приложения: одна сессия на процесс
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SeatBookingSession>>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, StoreError> {
        let store = open_store(&config.storage)?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: config::Config, store: Arc<dyn KeyValueStore>) -> Arc<Self> {
        let session = SeatBookingSession::open(store);
        Arc::new(Self {
            session: Arc::new(Mutex::new(session)),
            config,
        })
    }

    /// Выполняет действие над сессией в blocking-пуле: ядро и хранилища синхронные.
    /// Действия выполняются строго по одному.
    pub async fn run<F, T>(&self, action: F) -> Result<T, task::JoinError>
    where
        F: FnOnce(&mut SeatBookingSession) -> T + Send + 'static,
        T: Send + 'static,
    {
        let session = self.session.clone();
        task::spawn_blocking(move || {
            let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
            action(&mut session)
        })
        .await
    }
}

pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory seat store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File => {
            let store = FileStore::new(&config.file_path);
            info!("Using file seat store at {}", store.path().display());
            Ok(Arc::new(store))
        }
        StorageBackend::Redis => open_redis(config),
    }
}

#[cfg(feature = "redis-store")]
fn open_redis(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    let url = config.redis_url.as_deref().unwrap_or("redis://127.0.0.1/");
    Ok(Arc::new(store::RedisStore::new(url)?))
}

#[cfg(not(feature = "redis-store"))]
fn open_redis(_config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    Err(StoreError::Unsupported("redis"))
}
