//! Summarization service adapter
//!
//! Wraps a pretrained abstractive summarization model behind the
//! [`Summarizer`] trait and converts its output into a summary plus word
//! counts. Backend failures are collapsed into two cases callers can branch
//! on: validation errors keep their message, everything else becomes
//! "Error in summarizer".

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use sumweb_common::SummarizerConfig;
use thiserror::Error;
use tracing::{debug, error};

use crate::types::Language;

/// Message used for every non-validation backend failure
pub const GENERIC_SUMMARIZER_ERROR: &str = "Error in summarizer";

/// Bounds passed to the model for every generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    /// Minimum summary length, in model tokens
    pub min_length: u32,
    /// Maximum summary length, in model tokens
    pub max_length: u32,
    /// Sampling is always off so identical input gives identical output
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 150,
            do_sample: false,
        }
    }
}

impl From<&SummarizerConfig> for GenerationParams {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            do_sample: false,
        }
    }
}

/// Errors raised by a summarization backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The model rejected the input (bad length, empty input, ...)
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model service error {0}: {1}")]
    Service(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Model returned no summary")]
    EmptyResponse,
}

/// A pretrained summarization model
///
/// Implementations are created once at startup and shared read-only by
/// every request.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Model identifier for logs and diagnostics
    fn model_id(&self) -> &str;

    /// Generate an abstractive summary of `text`
    async fn generate(&self, text: &str, params: &GenerationParams) -> Result<String, BackendError>;
}

/// Summarization failure as seen by the pipeline
///
/// `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizerError {
    /// Backend validation message, passed through unchanged
    #[error("{0}")]
    Validation(String),

    /// Any other backend failure
    #[error("Error in summarizer")]
    Backend,
}

/// Generated summary with word counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub summary_text: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
}

/// Count words by splitting on single spaces
///
/// Empty pieces count, so `""` is one word and `"a  b"` is three. This is
/// the count shown on the result page, not the model's token count.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Adapter between the pipeline and a [`Summarizer`] backend
#[derive(Clone)]
pub struct SummarizationAdapter {
    backend: Arc<dyn Summarizer>,
    params: GenerationParams,
}

impl SummarizationAdapter {
    pub fn new(backend: Arc<dyn Summarizer>, params: GenerationParams) -> Self {
        Self { backend, params }
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Summarize `raw_text`
    ///
    /// `language` is accepted for future multilingual model routing and is
    /// currently only logged; every language goes to the same model.
    pub async fn summarize(
        &self,
        raw_text: &str,
        language: Language,
    ) -> Result<Summary, SummarizerError> {
        debug!(
            model = %self.backend.model_id(),
            language = %language,
            chars = raw_text.len(),
            "Requesting summary"
        );

        let summary_text = match self.backend.generate(raw_text, &self.params).await {
            Ok(text) => text,
            Err(BackendError::Validation(msg)) => {
                error!("Validation error in summarizer: {}", msg);
                return Err(SummarizerError::Validation(msg));
            }
            Err(e) => {
                error!("Error in summarizer: {}", e);
                return Err(SummarizerError::Backend);
            }
        };

        Ok(Summary {
            original_word_count: word_count(raw_text),
            summary_word_count: word_count(&summary_text),
            summary_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(Result<&'static str, fn() -> BackendError>);

    #[async_trait]
    impl Summarizer for FixedBackend {
        fn model_id(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, _text: &str, _params: &GenerationParams) -> Result<String, BackendError> {
            match &self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    fn adapter(backend: FixedBackend) -> SummarizationAdapter {
        SummarizationAdapter::new(Arc::new(backend), GenerationParams::default())
    }

    #[test]
    fn test_word_count_splits_on_single_spaces() {
        assert_eq!(word_count("a b c d"), 4);
        assert_eq!(word_count("a b"), 2);
        assert_eq!(word_count("a  b"), 3);
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("line one\nline two"), 3);
    }

    #[test]
    fn test_params_from_config() {
        let config = SummarizerConfig {
            min_length: 5,
            max_length: 50,
            ..SummarizerConfig::default()
        };
        let params = GenerationParams::from(&config);
        assert_eq!(params.min_length, 5);
        assert_eq!(params.max_length, 50);
        assert!(!params.do_sample);
    }

    #[tokio::test]
    async fn test_summary_with_counts() {
        let summary = adapter(FixedBackend(Ok("a b")))
            .summarize("a b c d", Language::English)
            .await
            .unwrap();

        assert_eq!(summary.summary_text, "a b");
        assert_eq!(summary.original_word_count, 4);
        assert_eq!(summary.summary_word_count, 2);
    }

    #[tokio::test]
    async fn test_validation_message_passes_through() {
        let result = adapter(FixedBackend(Err(|| {
            BackendError::Validation("Input is too long for this model".to_string())
        })))
        .summarize("text", Language::English)
        .await;

        assert_eq!(
            result,
            Err(SummarizerError::Validation("Input is too long for this model".to_string()))
        );
    }

    #[tokio::test]
    async fn test_other_errors_become_generic() {
        for make in [
            (|| BackendError::Network("connection refused".to_string())) as fn() -> BackendError,
            || BackendError::Service(503, "loading".to_string()),
            || BackendError::Parse("expected array".to_string()),
            || BackendError::EmptyResponse,
        ] {
            let err = adapter(FixedBackend(Err(make)))
                .summarize("text", Language::French)
                .await
                .unwrap_err();
            assert_eq!(err, SummarizerError::Backend);
            assert_eq!(err.to_string(), GENERIC_SUMMARIZER_ERROR);
        }
    }
}
