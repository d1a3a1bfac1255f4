//! Text analysis pipeline
//!
//! Validates a request, summarizes the text, scores the summary against the
//! source, and reports exactly one [`AnalysisOutcome`]. Every HTML and JSON
//! entry point goes through [`AnalysisPipeline::analyze`], so they share one
//! error boundary.
//!
//! ```text
//! Pending ──empty text / bad language──▶ Rejected
//!    │
//!    ├──summarizer error───────────────▶ Failed (summarizer message)
//!    ├──scorer error───────────────────▶ Failed ("Error summarizing.")
//!    └─────────────────────────────────▶ Succeeded
//! ```

use std::sync::Arc;
use tracing::{debug, error, info};

use super::rouge;
use super::summarizer::{GenerationParams, SummarizationAdapter, Summarizer};
use crate::types::{
    AnalysisOutcome, AnalysisResult, Language, MSG_EMPTY_TEXT, MSG_SCORING_FAILED,
    MSG_UNSUPPORTED_LANGUAGE,
};

/// Summarize-and-score pipeline shared by all request handlers
#[derive(Clone)]
pub struct AnalysisPipeline {
    summarizer: SummarizationAdapter,
}

impl AnalysisPipeline {
    pub fn new(backend: Arc<dyn Summarizer>, params: GenerationParams) -> Self {
        Self {
            summarizer: SummarizationAdapter::new(backend, params),
        }
    }

    /// Model identifier of the summarization backend
    pub fn model_id(&self) -> &str {
        self.summarizer.model_id()
    }

    /// Run one analysis request to completion
    ///
    /// Never retries; the first failure is the outcome.
    pub async fn analyze(&self, raw_text: &str, language_tag: &str) -> AnalysisOutcome {
        if raw_text.is_empty() {
            debug!("Rejected analysis request: empty text");
            return AnalysisOutcome::Rejected(MSG_EMPTY_TEXT.to_string());
        }

        let language: Language = match language_tag.parse() {
            Ok(language) => language,
            Err(e) => {
                debug!("Rejected analysis request: {}", e);
                return AnalysisOutcome::Rejected(MSG_UNSUPPORTED_LANGUAGE.to_string());
            }
        };

        let summary = match self.summarizer.summarize(raw_text, language).await {
            Ok(summary) => summary,
            Err(e) => return AnalysisOutcome::Failed(e.to_string()),
        };

        let overlap_score = match rouge::score(&summary.summary_text, raw_text) {
            Ok(score) => score,
            Err(e) => {
                error!("Error summarizing: {}", e);
                return AnalysisOutcome::Failed(MSG_SCORING_FAILED.to_string());
            }
        };

        info!(
            language = %language,
            original_words = summary.original_word_count,
            summary_words = summary.summary_word_count,
            rouge_1 = overlap_score,
            "Analysis complete"
        );

        AnalysisOutcome::Succeeded(AnalysisResult {
            summary_text: summary.summary_text,
            original_text: raw_text.to_string(),
            original_word_count: summary.original_word_count,
            summary_word_count: summary.summary_word_count,
            overlap_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::summarizer::BackendError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes the first `n` space-separated words of the input
    struct PrefixBackend {
        words: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Summarizer for PrefixBackend {
        fn model_id(&self) -> &str {
            "prefix"
        }

        async fn generate(&self, text: &str, _params: &GenerationParams) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(text.split(' ').take(self.words).collect::<Vec<_>>().join(" "))
        }
    }

    fn pipeline(words: usize) -> (AnalysisPipeline, Arc<PrefixBackend>) {
        let backend = Arc::new(PrefixBackend {
            words,
            calls: AtomicUsize::new(0),
        });
        (
            AnalysisPipeline::new(backend.clone(), GenerationParams::default()),
            backend,
        )
    }

    #[tokio::test]
    async fn test_empty_text_rejected_without_model_call() {
        let (pipeline, backend) = pipeline(2);
        let outcome = pipeline.analyze("", "english").await;
        assert_eq!(outcome, AnalysisOutcome::Rejected(MSG_EMPTY_TEXT.to_string()));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsupported_language_rejected_without_model_call() {
        let (pipeline, backend) = pipeline(2);
        let outcome = pipeline.analyze("some text", "klingon").await;
        assert_eq!(
            outcome,
            AnalysisOutcome::Rejected(MSG_UNSUPPORTED_LANGUAGE.to_string())
        );
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_counts_and_score() {
        let (pipeline, backend) = pipeline(2);
        let outcome = pipeline.analyze("a b c d", "hindi").await;

        let AnalysisOutcome::Succeeded(result) = outcome else {
            panic!("expected success, got {:?}", outcome);
        };
        assert_eq!(result.summary_text, "a b");
        assert_eq!(result.original_text, "a b c d");
        assert_eq!(result.original_word_count, 4);
        assert_eq!(result.summary_word_count, 2);
        // P = 1, R = 0.5
        assert!((result.overlap_score - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_summary_fails_at_scoring() {
        let (pipeline, _backend) = pipeline(0);
        let outcome = pipeline.analyze("a b c d", "english").await;
        assert_eq!(outcome, AnalysisOutcome::Failed(MSG_SCORING_FAILED.to_string()));
    }
}
