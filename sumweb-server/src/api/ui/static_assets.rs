//! Static asset handlers
//!
//! Embeds and serves the stylesheet at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const SUMWEB_CSS: &str = include_str!("../../../static/sumweb.css");

/// GET /static/sumweb.css
///
/// Serves the shared page styles
pub async fn serve_sumweb_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        SUMWEB_CSS,
    )
        .into_response()
}
