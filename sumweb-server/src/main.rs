//! sumweb-server - Text summarization web front end
//!
//! Serves the summarize/upload pages, forwards text to a pretrained
//! summarization model and scores each summary with ROUGE-1.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sumweb_common::{ConfigResolver, TomlConfig};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sumweb_server::services::{AnalysisPipeline, GenerationParams, InferenceClient, UploadStore};
use sumweb_server::{build_router, AppState};

/// Command-line arguments for sumweb-server
///
/// Every option overrides the matching config file value.
#[derive(Parser, Debug)]
#[command(name = "sumweb-server")]
#[command(about = "Text summarization web front end")]
#[command(version)]
struct Args {
    /// Config file (default: SUMWEB_CONFIG, then ~/.config/sumweb/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to listen on
    #[arg(long, env = "SUMWEB_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SUMWEB_PORT")]
    port: Option<u16>,

    /// Directory for uploaded documents
    #[arg(long, env = "SUMWEB_UPLOAD_FOLDER")]
    upload_folder: Option<PathBuf>,

    /// Summarization history file served by /download
    #[arg(long, env = "SUMWEB_HISTORY_FILE")]
    history_file: Option<PathBuf>,

    /// Summarization model inference endpoint
    #[arg(long, env = "SUMWEB_SUMMARIZER_ENDPOINT")]
    endpoint: Option<String>,

    /// Bearer token for the inference endpoint
    #[arg(long, env = "SUMWEB_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,
}

impl Args {
    fn apply_overrides(self, config: &mut TomlConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(upload_folder) = self.upload_folder {
            config.upload_folder = upload_folder;
        }
        if let Some(history_file) = self.history_file {
            config.history_file = history_file;
        }
        if let Some(endpoint) = self.endpoint {
            config.summarizer.endpoint = endpoint;
        }
        if let Some(api_token) = self.api_token {
            config.summarizer.api_token = Some(api_token);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is loaded before tracing so the configured level can be used
    let resolver = ConfigResolver::new(args.config.clone());
    let mut config = resolver.load().context("Failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    // RUST_LOG wins over the configured level
    let level = &config.logging.level;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("sumweb_server={level},sumweb_common={level},tower_http={level}").into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting sumweb-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match resolver.resolve_path() {
        Some(path) if path.exists() => info!("Configuration: {}", path.display()),
        Some(path) => warn!(
            "Config file {} does not exist, using compiled defaults",
            path.display()
        ),
        None => info!("Configuration: compiled defaults"),
    }

    // The model handle is created once and shared by every request
    let backend = InferenceClient::new(&config.summarizer)
        .context("Failed to create summarization client")?;
    info!(
        "Summarization model: {} (min_length={}, max_length={})",
        config.summarizer.endpoint, config.summarizer.min_length, config.summarizer.max_length
    );
    let pipeline = AnalysisPipeline::new(
        Arc::new(backend),
        GenerationParams::from(&config.summarizer),
    );

    let uploads = UploadStore::open(&config.upload_folder)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload folder {}",
                config.upload_folder.display()
            )
        })?;

    info!("History file: {}", config.history_file.display());

    let state = AppState::new(pipeline, uploads, config.history_file.clone());
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
