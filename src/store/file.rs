use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::KeyValueStore;
use crate::error::StoreError;

/// Хранилище в JSON-файле: объект `{ "key": "value", ... }`.
/// Запись атомарная: временный файл + rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // сериализует чтение-изменение-запись файла
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        // испорченный файл перезаписываем целиком
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            debug!("discarding unreadable store file {}: {}", self.path.display(), e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("seats.json"));
        assert_eq!(store.load("bookedSeats").unwrap(), None);
    }

    #[test]
    fn value_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("seats.json");

        FileStore::new(&path).save("bookedSeats", r#"["0-0","0-1"]"#).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.load("bookedSeats").unwrap().as_deref(),
            Some(r#"["0-0","0-1"]"#)
        );
    }

    #[test]
    fn keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("seats.json"));
        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();
        store.save("a", "3").unwrap();

        assert_eq!(store.load("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.load("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_is_replaced_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seats.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.load("bookedSeats").is_err());

        store.save("bookedSeats", "[]").unwrap();
        assert_eq!(store.load("bookedSeats").unwrap().as_deref(), Some("[]"));
    }
}
