//! Summarization history download
//!
//! The history file is only ever read here; nothing in the service writes
//! to it.

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio_util::io::ReaderStream;
use tracing::{debug, error};

use super::ui::pages;
use crate::types::MSG_FILE_NOT_FOUND;
use crate::AppState;

/// Build download routes
pub fn download_routes() -> Router<AppState> {
    Router::new().route("/download", get(download_history))
}

/// GET /download
///
/// Streams the history file as an attachment, or renders "File not found."
pub async fn download_history(State(state): State<AppState>) -> Response {
    let path = &state.history_file;

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("History file {} does not exist", path.display());
            return Html(pages::error_page(MSG_FILE_NOT_FOUND)).into_response();
        }
        Err(e) => {
            error!("Error opening history file {}: {}", path.display(), e);
            return Html(pages::error_page(MSG_FILE_NOT_FOUND)).into_response();
        }
    };

    let attachment_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("summarization_history.txt")
        .replace('"', "");

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", attachment_name),
            ),
        ],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response()
}
