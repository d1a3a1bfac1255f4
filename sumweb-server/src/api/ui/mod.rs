//! UI Routes - HTML pages for the sumweb web interface
//!
//! # Structure
//!
//! - **Static Assets** (`static_assets`): CSS file serving
//! - **Pages** (`pages`): page rendering shared by every HTML route
//!
//! Result, error and upload-review pages are rendered by the analysis and
//! upload handlers through [`pages`].

use axum::{response::Html, routing::get, Router};

use crate::AppState;

pub mod pages;
mod static_assets;

use static_assets::serve_sumweb_css;

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(root_page))
        .route("/about", get(about_page))
        .route("/testcases", get(testcases_page))
        // Static assets
        .route("/static/sumweb.css", get(serve_sumweb_css))
}

/// GET /
///
/// Text entry and document upload forms
async fn root_page() -> Html<String> {
    Html(pages::index_page())
}

/// GET /about
async fn about_page() -> Html<String> {
    Html(pages::about_page())
}

/// GET /testcases
async fn testcases_page() -> Html<String> {
    Html(pages::testcases_page())
}
