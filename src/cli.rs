//! Command-line entry for the HTTP server
//!
//! Flags override the config file and `FINLAB_*` environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::{Config, LogFormat, StoreBackend};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use crate::http::{self, AppState};

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "finlab_mcp=info,tower_http=debug";

/// FinLab documentation MCP server
///
/// Serves the FinLab docs as MCP tools over HTTP, plus an install script
/// and a feedback endpoint.
#[derive(Parser, Debug, Default)]
#[command(name = "finlab-mcp")]
#[command(version)]
#[command(about = "FinLab documentation MCP server", long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Config file (takes precedence over FINLAB_CONFIG)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Serve Markdown documents from this directory instead of the built-in set
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,

    /// Feedback storage backend
    #[arg(long, value_parser = parse_backend)]
    pub feedback_backend: Option<StoreBackend>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

fn parse_backend(s: &str) -> Result<StoreBackend, String> {
    s.parse::<StoreBackend>().map_err(|e| e.to_string())
}

impl Cli {
    /// Layer command-line flags over a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.docs_dir {
            config.docs.dir = Some(dir.clone());
        }
        if let Some(backend) = self.feedback_backend {
            config.feedback.backend = backend;
        }
        if self.log_json {
            config.logging.format = LogFormat::Json;
        }
    }

    /// Resolve the effective configuration
    pub fn load_config(&self, xdg: &XdgDirs) -> crate::core::error::Result<Config> {
        let explicit = self
            .config
            .clone()
            .or_else(|| std::env::var("FINLAB_CONFIG").ok().map(PathBuf::from));

        let mut config = Config::load_from(xdg, explicit.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Load configuration, build services and serve until shutdown
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();
    let config = cli.load_config(&xdg)?;

    init_tracing(config.logging.format);

    tracing::info!("Starting FinLab MCP server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    xdg.log_paths();
    xdg.ensure_config_dir()?;
    config.log_config();

    let services = Arc::new(Services::new(config.clone()).await?);
    tracing::info!("Serving {} documents", services.docs.len());

    let app = http::router(AppState::new(services));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("MCP endpoint at http://{}/mcp", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
