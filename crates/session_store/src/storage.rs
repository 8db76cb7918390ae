//! Key-value storage trait and implementations

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// Flat string key-value storage, the shape of browser local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store. Models a single browser tab's local storage; cloning
/// shares the underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// File-backed store: one file per key under a base directory.
#[derive(Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        fs::write(self.key_path(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path).await?;
        }

        Ok(())
    }
}
