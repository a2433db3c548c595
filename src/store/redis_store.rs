use redis::{Client, Commands, Connection, RedisError};
use std::sync::Mutex;
use tracing::info;

use super::KeyValueStore;
use crate::error::StoreError;

/// Хранилище в Redis. Ядро синхронное, поэтому используется блокирующее
/// соединение; HTTP-слой вызывает его из `spawn_blocking`.
pub struct RedisStore {
    conn: Mutex<Connection>,
}

impl RedisStore {
    pub fn new(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url).map_err(backend)?;
        let conn = client.get_connection().map_err(backend)?;
        info!("Redis store connected");
        Ok(RedisStore { conn: Mutex::new(conn) })
    }
}

fn backend(e: RedisError) -> StoreError {
    StoreError::Backend(Box::new(e))
}

impl KeyValueStore for RedisStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.get::<_, Option<String>>(key).map_err(backend)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.set::<_, _, ()>(key, value).map_err(backend)
    }
}
