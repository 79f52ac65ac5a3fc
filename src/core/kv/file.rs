//! File-backed key-value backend.
//!
//! Each key lives in its own JSON file named by the URL-safe base64
//! encoding of the key, so arbitrary keys (including `:`) map to
//! portable file names.

use super::{Entry, KvStore};
use crate::core::error::{FinlabError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

const EXTENSION: &str = "json";

#[derive(Debug, Serialize, Deserialize)]
struct FileEntry {
    key: String,
    #[serde(flatten)]
    entry: Entry,
}

/// Key-value store persisted as one file per key
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    /// Open (creating if needed) a store rooted at `root`
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            FinlabError::StorageError(format!("Failed to create {}: {e}", root.display()))
        })?;
        Ok(Self { root })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{EXTENSION}", URL_SAFE_NO_PAD.encode(key)))
    }

    fn decode_key(path: &Path) -> Option<String> {
        if path.extension()? != EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let bytes = URL_SAFE_NO_PAD.decode(stem).ok()?;
        String::from_utf8(bytes).ok()
    }

    /// Read a live entry, removing it if it has expired
    async fn read_entry(&self, path: &Path) -> Result<Option<FileEntry>> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored: FileEntry = serde_json::from_str(&raw)?;
        if stored.entry.is_expired(Utc::now()) {
            tracing::debug!("Removing expired key '{}'", stored.key);
            remove_if_present(path).await?;
            return Ok(None);
        }
        Ok(Some(stored))
    }
}

async fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

#[async_trait]
impl KvStore for FileKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        Ok(self.read_entry(&path).await?.map(|stored| stored.entry.value))
    }

    async fn put(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()> {
        let path = self.entry_path(key);
        let stored = FileEntry {
            key: key.to_string(),
            entry: Entry::new(value, ttl),
        };
        let json = serde_json::to_vec(&stored)?;

        // Write-then-rename so readers never observe a partial file
        let tmp = self
            .root
            .join(format!(".{}.tmp", uuid::Uuid::new_v4()));
        fs::write(&tmp, json).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            remove_if_present(&tmp).await?;
            return Err(e.into());
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        remove_if_present(&self.entry_path(key)).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut dir = fs::read_dir(&self.root).await?;

        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            let Some(key) = Self::decode_key(&path) else {
                continue;
            };
            if !key.starts_with(prefix) {
                continue;
            }
            match self.read_entry(&path).await {
                Ok(Some(_)) => keys.push(key),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping unreadable entry {:?}: {}", path, e),
            }
        }

        keys.sort();
        Ok(keys)
    }
}
