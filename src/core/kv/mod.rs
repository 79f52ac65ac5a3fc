//! Key-value storage for feedback records.
//!
//! The feedback adapter only needs get/put/delete/list over string
//! values with an optional time-to-live, so the backend sits behind
//! the [`KvStore`] trait.
//!
//! # Backends
//!
//! - **MemoryKv**: process-local map, lost on restart
//! - **FileKv**: one JSON file per key under a data directory
//!
//! ```text
//! {data_dir}/
//! ├── ZmVlZGJhY2s6MTIz.json   # base64url("feedback:123")
//! └── ...
//! ```
//!
//! Expired entries behave as if they were never written and are
//! removed lazily the next time they are touched.

mod file;
mod memory;

pub use file::FileKv;
pub use memory::MemoryKv;

use crate::core::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// String key-value store with optional per-entry expiration
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Value for `key`, or `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite `key`
    async fn put(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()>;

    /// Remove `key`; removing an absent key succeeds
    async fn delete(&self, key: &str) -> Result<()>;

    /// Live keys starting with `prefix`, sorted
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Stored value plus its expiration instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Entry {
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new(value: String, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.and_then(|ttl| {
            chrono::Duration::from_std(ttl)
                .ok()
                .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        });
        Self { value, expires_at }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
