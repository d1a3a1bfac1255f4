//! HTTP handlers for sumweb-server
//!
//! HTML routes render pages for every outcome, including failures; only
//! `/api/*` routes return JSON.

pub mod analyze;
pub mod download;
pub mod health;
pub mod ui;
pub mod upload;

pub use analyze::analysis_routes;
pub use download::download_routes;
pub use health::health_routes;
pub use ui::ui_routes;
pub use upload::upload_routes;
