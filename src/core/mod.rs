//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, MCP, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Feedback records and HTTP bodies
//! - **xdg**: XDG directory handling
//! - **docs**: Immutable document corpus
//! - **text**: List, fetch, search and factor filtering over the corpus
//! - **kv**: Key-value backends with expiring entries
//! - **feedback**: Feedback CRUD over a key-value backend
//! - **services**: Unified service container

pub mod config;
pub mod docs;
pub mod error;
pub mod feedback;
pub mod kv;
pub mod services;
pub mod text;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{FinlabError, Result};
pub use services::Services;
