//! Text analysis endpoints
//!
//! `POST /analyze` (text form) and `POST /summarize` (uploaded-document
//! review form) render HTML; `POST /api/analyze` returns JSON. All three run
//! the same pipeline and therefore fail the same way.

use axum::{
    extract::State,
    response::Html,
    routing::post,
    Form, Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::ui::pages;
use crate::types::{AnalysisOutcome, AnalysisResult};
use crate::{ApiError, ApiResult, AppState};

/// Form fields posted by the index and analyze pages
///
/// Missing fields are treated as empty, which the pipeline rejects.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub rawtext: String,
    #[serde(default)]
    pub language: String,
    /// Set when the text came from an uploaded document
    #[serde(default)]
    pub filename: Option<String>,
}

/// JSON body for `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub rawtext: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "english".to_string()
}

/// Build analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_text))
        .route("/summarize", post(summarize_text))
        .route("/api/analyze", post(analyze_json))
}

/// POST /analyze
pub async fn analyze_text(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let outcome = state.pipeline.analyze(&form.rawtext, &form.language).await;
    render_outcome(outcome)
}

/// POST /summarize
///
/// Same contract as `/analyze`; `filename` is informational only.
pub async fn summarize_text(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    if let Some(filename) = form.filename.as_deref().filter(|f| !f.is_empty()) {
        debug!(filename = %filename, "Summarizing uploaded document");
    }
    let outcome = state.pipeline.analyze(&form.rawtext, &form.language).await;
    render_outcome(outcome)
}

/// POST /api/analyze
///
/// **Request:** `{"rawtext": "...", "language": "english"}`
/// **Response:** `{"summary", "original_txt", "len_orig_txt", "len_summary", "rouge_score"}`
///
/// **Errors:**
/// - 400 Bad Request: empty text or unsupported language
/// - 502 Bad Gateway: summarization or scoring failed
pub async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalysisResult>> {
    match state.pipeline.analyze(&request.rawtext, &request.language).await {
        AnalysisOutcome::Succeeded(result) => Ok(Json(result)),
        AnalysisOutcome::Rejected(msg) => Err(ApiError::BadRequest(msg)),
        AnalysisOutcome::Failed(msg) => Err(ApiError::BadGateway(msg)),
    }
}

/// Result page on success, error page otherwise
fn render_outcome(outcome: AnalysisOutcome) -> Html<String> {
    match outcome {
        AnalysisOutcome::Succeeded(result) => Html(pages::summary_page(&result)),
        AnalysisOutcome::Rejected(msg) | AnalysisOutcome::Failed(msg) => {
            Html(pages::error_page(&msg))
        }
    }
}
