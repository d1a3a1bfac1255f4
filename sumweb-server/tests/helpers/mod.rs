//! Test Helper Utilities
//!
//! Shared utilities for testing sumweb-server

#![allow(dead_code)]

pub mod stub_summarizer;
pub mod test_app;

// Re-export commonly used items
pub use stub_summarizer::{StubBehavior, StubSummarizer};
pub use test_app::{body_json, body_text, multipart_upload, TestApp};
