//! Unified service container for finlab-mcp
//!
//! Provides shared access to all core services.

use crate::core::config::{Config, StoreBackend};
use crate::core::docs::DocumentStore;
use crate::core::error::Result;
use crate::core::feedback::FeedbackStore;
use crate::core::kv::{FileKv, KvStore, MemoryKv};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Documents served by the MCP tools
    pub docs: Arc<DocumentStore>,

    /// Feedback CRUD
    pub feedback: Arc<FeedbackStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Loads the document corpus and opens the configured feedback
    /// backend.
    pub async fn new(config: Config) -> Result<Self> {
        let docs = match &config.docs.dir {
            Some(dir) => DocumentStore::from_dir(dir)?,
            None => DocumentStore::embedded().clone(),
        };

        let kv: Arc<dyn KvStore> = match config.feedback.backend {
            StoreBackend::Memory => Arc::new(MemoryKv::new()),
            StoreBackend::File => Arc::new(FileKv::open(&config.feedback.data_dir).await?),
        };

        Ok(Self::from_parts(config, docs, kv))
    }

    /// Assemble services from an already-built corpus and backend
    pub fn from_parts(config: Config, docs: DocumentStore, kv: Arc<dyn KvStore>) -> Self {
        let feedback = Arc::new(FeedbackStore::new(kv, config.feedback_ttl()));

        Self {
            docs: Arc::new(docs),
            feedback,
            config: Arc::new(config),
        }
    }
}
