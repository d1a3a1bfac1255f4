//! HTTP inference client for the summarization model
//!
//! Talks to a Hugging-Face-style inference endpoint hosting
//! `facebook/bart-large-cnn` (or any compatible summarization model).
//!
//! **Request:** `{"inputs": "...", "parameters": {"min_length": 30, "max_length": 150, "do_sample": false}}`
//! **Response:** `[{"summary_text": "..."}]`
//! **Error body:** `{"error": "..."}`

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use sumweb_common::SummarizerConfig;

use super::summarizer::{BackendError, GenerationParams, Summarizer};

const USER_AGENT: &str = concat!("sumweb/", env!("CARGO_PKG_VERSION"));

/// Request body sent to the inference endpoint
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// One generated summary in the response array
#[derive(Debug, Deserialize)]
struct InferenceOutput {
    summary_text: String,
}

/// Error body returned by the inference endpoint
#[derive(Debug, Deserialize)]
struct InferenceErrorBody {
    error: ErrorDetail,
}

/// Endpoints report either a single message or a list of messages
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    One(String),
    Many(Vec<String>),
}

/// Summarization model reached over HTTP
pub struct InferenceClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn new(config: &SummarizerConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            api_token: config
                .api_token
                .clone()
                .filter(|token| !token.trim().is_empty()),
        })
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    fn model_id(&self) -> &str {
        &self.endpoint
    }

    async fn generate(&self, text: &str, params: &GenerationParams) -> Result<String, BackendError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: params,
        };

        let mut request = self.http_client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(endpoint = %self.endpoint, "Querying summarization model");

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if status.as_u16() == 400 || status.as_u16() == 422 {
            return Err(BackendError::Validation(error_message(&body)));
        }

        if !status.is_success() {
            return Err(BackendError::Service(status.as_u16(), error_message(&body)));
        }

        parse_summary(&body)
    }
}

/// Extract the first summary from a successful response body
fn parse_summary(body: &str) -> Result<String, BackendError> {
    let outputs: Vec<InferenceOutput> =
        serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;

    outputs
        .into_iter()
        .next()
        .map(|output| output.summary_text)
        .ok_or(BackendError::EmptyResponse)
}

/// Human-readable message from an error response body
///
/// Falls back to the raw body when it is not the usual JSON shape.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<InferenceErrorBody>(body) {
        Ok(InferenceErrorBody {
            error: ErrorDetail::One(msg),
        }) => msg,
        Ok(InferenceErrorBody {
            error: ErrorDetail::Many(msgs),
        }) => msgs.join("; "),
        Err(_) => body.trim().to_string(),
    }
}
