pub mod persist;

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use crate::error::DashboardError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, DashboardError>> + Send;

    fn set(&mut self, key: &str, value: &str) -> impl Future<Output = Result<(), DashboardError>> + Send;
}

/// Stores each key as its own file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DashboardError> {
        let path = self.path_for(key);

        if tokio::fs::try_exists(&path).await? {
            Ok(Some(tokio::fs::read_to_string(&path).await?))
        } else {
            Ok(None)
        }
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), DashboardError> {
        tokio::fs::create_dir_all(&self.dir).await
            .map_err(|err| DashboardError::storage(format!("Failed to create data directory {}: {}", self.dir.display(), err)))?;

        let path = self.path_for(key);
        tokio::fs::write(&path, value).await
            .map_err(|err| DashboardError::storage(format!("Failed to write {}: {}", path.display(), err)))?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DashboardError> {
        Ok(self.entries.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), DashboardError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.get("theme").await.unwrap(), None);
        store.set("theme", "dark").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert!(dir.path().join("data").join("theme.json").exists());
    }

    #[tokio::test]
    async fn file_store_encodes_keys_into_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("../escape", "x").await.unwrap();
        assert!(dir.path().join("..%2Fescape.json").exists());
        assert_eq!(store.get("../escape").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", "1").await.unwrap();
        store.set("k", "2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
    }
}
