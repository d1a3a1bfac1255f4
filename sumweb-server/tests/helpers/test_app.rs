//! Router fixture backed by a temporary upload folder

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use sumweb_server::services::{AnalysisPipeline, GenerationParams, UploadStore};
use sumweb_server::{build_router, AppState};

use super::stub_summarizer::{StubBehavior, StubSummarizer};

pub const BOUNDARY: &str = "----sumweb-test-boundary";

/// A router plus the handles tests inspect afterwards
pub struct TestApp {
    pub router: Router,
    pub summarizer: Arc<StubSummarizer>,
    pub upload_dir: PathBuf,
    pub history_file: PathBuf,
    // Keeps the temporary directory alive for the test's duration
    _dir: TempDir,
}

impl TestApp {
    pub async fn new(behavior: StubBehavior) -> Self {
        let dir = TempDir::new().unwrap();
        let upload_dir = dir.path().join("uploads");
        let history_file = dir.path().join("summarization_history.txt");

        let summarizer = Arc::new(StubSummarizer::new(behavior));
        let pipeline = AnalysisPipeline::new(summarizer.clone(), GenerationParams::default());
        let uploads = UploadStore::open(&upload_dir).await.unwrap();

        let state = AppState::new(pipeline, uploads, history_file.clone());

        Self {
            router: build_router(state),
            summarizer,
            upload_dir,
            history_file,
            _dir: dir,
        }
    }

    /// Router clone for a single `oneshot` request
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build a multipart `POST /upload` request with one `file` part
pub fn multipart_upload(filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
