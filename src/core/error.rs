//! Error types and error handling for the FinLab MCP service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (JSON-RPC error
//! codes) is handled in the `mcp` adapter, and the HTTP status
//! mapping lives in `http::error`.

use thiserror::Error;

/// Result type alias for FinLab MCP operations
pub type Result<T> = std::result::Result<T, FinlabError>;

/// Main error type for the FinLab MCP service
#[derive(Error, Debug)]
pub enum FinlabError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("id required")]
    MissingId,

    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Document directory error: {0}")]
    DocumentLoad(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl FinlabError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid caller input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            FinlabError::MissingField(_) | FinlabError::MissingId | FinlabError::InvalidJson(_)
        )
    }
}
