//! Document upload endpoints
//!
//! `POST /upload` stores a plain-text document and redirects to
//! `/analyze_uploaded/<filename>`, where the text is shown for review before
//! it is posted to `/summarize`.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::{debug, error, info};

use super::ui::pages;
use crate::types::{Language, MSG_UPLOAD_READ_FAILED, MSG_UPLOAD_WRITE_FAILED};
use crate::AppState;

/// Largest accepted upload request
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Form fields posted to `/analyze_uploaded/<filename>`
#[derive(Debug, Default, Deserialize)]
pub struct LanguageForm {
    pub language: Option<String>,
}

/// Build upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/analyze_uploaded/:filename",
            get(analyze_uploaded_get).post(analyze_uploaded_post),
        )
}

/// POST /upload
///
/// Multipart field `file`. A request without a file, with an empty
/// filename, or without a multipart body at all is sent back to the page it
/// came from (same-origin `Referer`, otherwise `/`).
pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            debug!("Upload without a multipart body: {}", e);
            return redirect_back(&headers);
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                debug!("Malformed upload request: {}", e);
                return redirect_back(&headers);
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            debug!("Upload without a filename");
            return redirect_back(&headers);
        }

        let content = match field.bytes().await {
            Ok(content) => content,
            Err(e) => {
                error!("Error reading uploaded file {:?}: {}", filename, e);
                return Html(pages::error_page(MSG_UPLOAD_WRITE_FAILED)).into_response();
            }
        };

        return match state.uploads.store(&filename, &content).await {
            Ok(key) => {
                info!(filename = %key, bytes = content.len(), "Document uploaded");
                Redirect::to(&format!("/analyze_uploaded/{}", key)).into_response()
            }
            Err(e) => {
                error!("Error saving uploaded file {:?}: {}", filename, e);
                Html(pages::error_page(MSG_UPLOAD_WRITE_FAILED)).into_response()
            }
        };
    }

    debug!("Upload without a file part");
    redirect_back(&headers)
}

/// GET /analyze_uploaded/:filename
///
/// Uses English until the visitor picks a language.
pub async fn analyze_uploaded_get(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Html<String> {
    render_uploaded(&state, &filename, Language::default().as_str()).await
}

/// POST /analyze_uploaded/:filename
pub async fn analyze_uploaded_post(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    Form(form): Form<LanguageForm>,
) -> Html<String> {
    let language = form
        .language
        .unwrap_or_else(|| Language::default().as_str().to_string());
    render_uploaded(&state, &filename, &language).await
}

async fn render_uploaded(state: &AppState, filename: &str, language: &str) -> Html<String> {
    match state.uploads.retrieve(filename).await {
        Ok(rawtext) => Html(pages::analyze_page(&rawtext, filename, language)),
        Err(e) => {
            error!("Error analyzing uploaded file: {}", e);
            Html(pages::error_page(MSG_UPLOAD_READ_FAILED))
        }
    }
}

fn redirect_back(headers: &HeaderMap) -> Response {
    let target = same_origin_referer(headers).unwrap_or_else(|| "/".to_string());
    Redirect::to(&target).into_response()
}

/// Path (and query) of the `Referer` header when it points at this server
///
/// Relative references must be absolute paths; `//host/...` is refused.
/// Absolute URLs are accepted only when their authority matches `Host`.
fn same_origin_referer(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(header::REFERER)?.to_str().ok()?.trim();

    if referer.starts_with('/') {
        if referer.starts_with("//") || referer.starts_with("/\\") {
            return None;
        }
        return Some(referer.to_string());
    }

    let url = reqwest::Url::parse(referer).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = headers.get(header::HOST)?.to_str().ok()?;
    let authority = match url.port() {
        Some(port) => format!("{}:{}", url.host_str()?, port),
        None => url.host_str()?.to_string(),
    };
    if !authority.eq_ignore_ascii_case(host) {
        return None;
    }

    Some(match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    })
}
