//! Deterministic summarization backend for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use sumweb_server::services::{BackendError, GenerationParams, Summarizer};

/// What the stub does when asked for a summary
#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Return the first `n` space-separated words of the input
    FirstWords(usize),
    /// Return this text regardless of input
    Fixed(String),
    /// Reject the input with a validation message
    Validation(String),
    /// Fail as if the model service were unreachable
    Outage,
}

pub struct StubSummarizer {
    behavior: StubBehavior,
    calls: AtomicUsize,
}

impl StubSummarizer {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    fn model_id(&self) -> &str {
        "stub-summarizer"
    }

    async fn generate(&self, text: &str, _params: &GenerationParams) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::FirstWords(n) => Ok(text.split(' ').take(*n).collect::<Vec<_>>().join(" ")),
            StubBehavior::Fixed(summary) => Ok(summary.clone()),
            StubBehavior::Validation(msg) => Err(BackendError::Validation(msg.clone())),
            StubBehavior::Outage => Err(BackendError::Network("connection refused".to_string())),
        }
    }
}
