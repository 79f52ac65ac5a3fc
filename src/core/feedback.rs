//! Feedback store
//!
//! Create, list and delete feedback records over a [`KvStore`]. Records
//! live under `feedback:<uuid>` and expire after the configured TTL.

use crate::core::error::{FinlabError, Result};
use crate::core::kv::KvStore;
use crate::core::types::{FeedbackCategory, FeedbackRecord, FeedbackRequest};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Key namespace for feedback records
pub const FEEDBACK_PREFIX: &str = "feedback:";

/// Feedback CRUD over a key-value backend
pub struct FeedbackStore {
    kv: Arc<dyn KvStore>,
    ttl: Duration,
}

impl FeedbackStore {
    pub fn new(kv: Arc<dyn KvStore>, ttl: Duration) -> Self {
        Self { kv, ttl }
    }

    fn key(id: &str) -> String {
        format!("{FEEDBACK_PREFIX}{id}")
    }

    /// Persist a new record and return its id
    ///
    /// # Errors
    ///
    /// - `MissingField("message")`: message absent or empty
    /// - storage errors from the backend
    pub async fn create(&self, req: FeedbackRequest) -> Result<String> {
        let message = req
            .message
            .filter(|m| !m.is_empty())
            .ok_or(FinlabError::MissingField("message"))?;

        let record = FeedbackRecord {
            id: Uuid::new_v4().to_string(),
            category: FeedbackCategory::coerce(req.category.as_ref().and_then(|v| v.as_str())),
            message,
            context: req.context,
            timestamp: Utc::now(),
        };

        let value = serde_json::to_string(&record)?;
        self.kv
            .put(&Self::key(&record.id), value, Some(self.ttl))
            .await?;

        tracing::info!(
            id = %record.id,
            category = ?record.category,
            "Feedback recorded"
        );
        Ok(record.id)
    }

    /// All readable records, newest first
    ///
    /// Entries that disappear between listing and reading, or that fail
    /// to parse, are skipped.
    pub async fn list(&self) -> Result<Vec<FeedbackRecord>> {
        let keys = self.kv.list(FEEDBACK_PREFIX).await?;
        let mut records = Vec::with_capacity(keys.len());

        for key in keys {
            let raw = match self.kv.get(&key).await {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Skipping feedback '{}': {}", key, e);
                    continue;
                }
            };
            match serde_json::from_str::<FeedbackRecord>(&raw) {
                Ok(record) => records.push(record),
                Err(e) => tracing::debug!("Skipping unparseable feedback '{}': {}", key, e),
            }
        }

        records.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    /// Delete a record by id; deleting an unknown id succeeds
    ///
    /// # Errors
    ///
    /// - `MissingId`: empty id
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(FinlabError::MissingId);
        }
        self.kv.delete(&Self::key(id)).await?;
        tracing::info!(id = %id, "Feedback deleted");
        Ok(())
    }
}
