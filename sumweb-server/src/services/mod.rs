//! Services for the text analysis pipeline
//!
//! - **summarizer**: Summarization adapter and backend trait
//! - **inference_client**: HTTP backend for the pretrained model
//! - **rouge**: ROUGE-1 scoring of summaries
//! - **pipeline**: Validate → summarize → score
//! - **upload_store**: Uploaded document persistence

pub mod inference_client;
pub mod pipeline;
pub mod rouge;
pub mod summarizer;
pub mod upload_store;

pub use inference_client::InferenceClient;
pub use pipeline::AnalysisPipeline;
pub use summarizer::{BackendError, GenerationParams, Summarizer, SummarizerError};
pub use upload_store::{UploadError, UploadStore};
