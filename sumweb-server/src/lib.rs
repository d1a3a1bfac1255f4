//! sumweb-server library interface
//!
//! Text summarization web front end: accepts typed or uploaded text, asks a
//! pretrained model for an abstractive summary, scores it with ROUGE-1 and
//! renders the result.

pub mod api;
pub mod error;
pub mod services;
pub mod types;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

use crate::services::{AnalysisPipeline, UploadStore};

/// Application state shared across handlers
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Summarize-and-score pipeline (holds the shared model handle)
    pub pipeline: AnalysisPipeline,
    /// Uploaded document store
    pub uploads: UploadStore,
    /// Summarization history file served by `/download`
    pub history_file: PathBuf,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(pipeline: AnalysisPipeline, uploads: UploadStore, history_file: PathBuf) -> Self {
        Self {
            pipeline,
            uploads,
            history_file,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML pages)
        .merge(api::ui_routes())
        // Form and JSON analysis
        .merge(api::analysis_routes())
        .merge(api::upload_routes())
        .merge(api::download_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
