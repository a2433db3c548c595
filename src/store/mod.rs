//! Хранилище ключ-значение для забронированных мест.
//!
//! Ядро пишет под ключом [`BOOKED_SEATS_KEY`] JSON-массив идентификаторов
//! `"row-col"`. Бэкенды: память (тесты), JSON-файл и Redis.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;

pub mod file;
#[cfg(feature = "redis-store")]
pub mod redis_store;

pub use file::FileStore;
#[cfg(feature = "redis-store")]
pub use redis_store::RedisStore;

pub const BOOKED_SEATS_KEY: &str = "bookedSeats";

/// Синхронное хранилище ключ-значение
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        assert_eq!(store.load(BOOKED_SEATS_KEY).unwrap(), None);

        store.save(BOOKED_SEATS_KEY, r#"["0-0"]"#).unwrap();
        store.save(BOOKED_SEATS_KEY, r#"["0-1"]"#).unwrap();
        assert_eq!(store.load(BOOKED_SEATS_KEY).unwrap().as_deref(), Some(r#"["0-1"]"#));
    }
}
