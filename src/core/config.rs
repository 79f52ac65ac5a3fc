//! Configuration management for the FinLab MCP service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{FinlabError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Document corpus configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Directory of `*.md` files to serve instead of the embedded corpus
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Which key-value backend holds feedback records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
}

impl std::str::FromStr for StoreBackend {
    type Err = FinlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            other => Err(FinlabError::ConfigError(format!(
                "Unknown feedback backend '{other}' (expected 'memory' or 'file')"
            ))),
        }
    }
}

/// Feedback store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    /// Root directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Days before a feedback record expires
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u32,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_backend() -> StoreBackend {
    StoreBackend::File
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_ttl_days() -> u32 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
            ttl_days: default_ttl_days(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FinlabError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the config file and apply environment overrides
    ///
    /// File priority:
    /// 1. `path` (from `--config` or FINLAB_CONFIG)
    /// 2. XDG config file (~/.config/finlab-mcp/config.toml)
    /// 3. ./finlab-mcp.toml
    /// 4. Defaults
    ///
    /// The result is not validated, so callers can layer further
    /// overrides first.
    pub fn load_from(xdg: &XdgDirs, path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("finlab-mcp.toml").exists() {
                Self::from_file("finlab-mcp.toml")?
            } else {
                Self::default()
            }
        };

        // Feedback lives under the XDG data directory unless placed explicitly
        if env::var("FINLAB_DATA_DIR").is_err() && config.feedback.data_dir == default_data_dir() {
            config.feedback.data_dir = xdg.feedback_dir();
        }

        config.merge_env();
        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("FINLAB_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("FINLAB_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(dir) = env::var("FINLAB_DOCS_DIR") {
            self.docs.dir = Some(PathBuf::from(dir));
        }

        if let Ok(backend) = env::var("FINLAB_FEEDBACK_BACKEND") {
            match backend.parse() {
                Ok(b) => self.feedback.backend = b,
                Err(e) => tracing::warn!("Ignoring FINLAB_FEEDBACK_BACKEND: {}", e),
            }
        }
        if let Ok(data_dir) = env::var("FINLAB_DATA_DIR") {
            self.feedback.data_dir = PathBuf::from(data_dir).join("feedback");
        }
        if let Ok(ttl) = env::var("FINLAB_FEEDBACK_TTL_DAYS") {
            if let Ok(days) = ttl.parse() {
                self.feedback.ttl_days = days;
            }
        }

        if let Ok(format) = env::var("FINLAB_LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "pretty" => self.logging.format = LogFormat::Pretty,
                _ => {}
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(FinlabError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.feedback.ttl_days == 0 {
            return Err(FinlabError::ConfigError(
                "Feedback TTL must be at least one day".to_string(),
            ));
        }

        if let Some(dir) = &self.docs.dir {
            if !dir.is_dir() {
                return Err(FinlabError::ConfigError(format!(
                    "Docs directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Feedback expiration as a duration
    pub fn feedback_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.feedback.ttl_days) * 24 * 60 * 60)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        match &self.docs.dir {
            Some(dir) => tracing::info!("  Docs dir: {:?}", dir),
            None => tracing::info!("  Docs: embedded corpus"),
        }
        tracing::info!("  Feedback backend: {:?}", self.feedback.backend);
        if self.feedback.backend == StoreBackend::File {
            tracing::info!("  Feedback dir: {:?}", self.feedback.data_dir);
        }
        tracing::info!("  Feedback TTL: {} days", self.feedback.ttl_days);
    }
}
