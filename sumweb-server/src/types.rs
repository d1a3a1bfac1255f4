//! Request/response types for the text analysis pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shown when an analysis request carries no text
pub const MSG_EMPTY_TEXT: &str = "Please provide text to analyze.";
/// Shown when the language tag is not in [`Language::ALL`]
pub const MSG_UNSUPPORTED_LANGUAGE: &str = "Unsupported language.";
/// Shown when scoring a generated summary fails
pub const MSG_SCORING_FAILED: &str = "Error summarizing.";
/// Shown when a stored upload cannot be read
pub const MSG_UPLOAD_READ_FAILED: &str = "Error analyzing uploaded file.";
/// Shown when an upload cannot be written
pub const MSG_UPLOAD_WRITE_FAILED: &str = "Error saving uploaded file.";
/// Shown when the summarization history file is unavailable
pub const MSG_FILE_NOT_FOUND: &str = "File not found.";

/// Languages accepted by the analysis form
///
/// The tag is validated but does not change how text is summarized; the
/// current model is English-only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Kannada,
    Malayalam,
    French,
    German,
    Chinese,
    Korean,
}

impl Language {
    /// Every supported language, in form display order
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Hindi,
        Language::Kannada,
        Language::Malayalam,
        Language::French,
        Language::German,
        Language::Chinese,
        Language::Korean,
    ];

    /// Form tag (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Kannada => "kannada",
            Language::Malayalam => "malayalam",
            Language::French => "french",
            Language::German => "german",
            Language::Chinese => "chinese",
            Language::Korean => "korean",
        }
    }

    /// Human-readable label for the language picker
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language tag outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0:?}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Tags are matched exactly; `"English"` is not a supported tag.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == tag)
            .ok_or_else(|| UnsupportedLanguage(tag.to_string()))
    }
}

/// Successful analysis of one request
///
/// Serialized with the field names the result page has always used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Generated summary
    #[serde(rename = "summary")]
    pub summary_text: String,
    /// Text the summary was generated from
    #[serde(rename = "original_txt")]
    pub original_text: String,
    /// Space-separated token count of the original text
    #[serde(rename = "len_orig_txt")]
    pub original_word_count: usize,
    /// Space-separated token count of the summary
    #[serde(rename = "len_summary")]
    pub summary_word_count: usize,
    /// ROUGE-1 F score of summary against original, in [0, 1]
    #[serde(rename = "rouge_score")]
    pub overlap_score: f64,
}

/// Terminal state of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Summary generated and scored
    Succeeded(AnalysisResult),
    /// Request failed validation; no model call was made
    Rejected(String),
    /// Summarizer or scorer failed
    Failed(String),
}

impl AnalysisOutcome {
    /// User-facing failure message, if any
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Succeeded(_) => None,
            AnalysisOutcome::Rejected(msg) | AnalysisOutcome::Failed(msg) => Some(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_tag_parses() {
        for tag in [
            "english", "hindi", "kannada", "malayalam", "french", "german", "chinese", "korean",
        ] {
            let lang: Language = tag.parse().unwrap();
            assert_eq!(lang.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_and_mixed_case_tags_rejected() {
        assert!("klingon".parse::<Language>().is_err());
        assert!("English".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().as_str(), "english");
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            AnalysisOutcome::Rejected(MSG_EMPTY_TEXT.to_string()).failure_message(),
            Some(MSG_EMPTY_TEXT)
        );
        let ok = AnalysisOutcome::Succeeded(AnalysisResult {
            summary_text: "a".to_string(),
            original_text: "a b".to_string(),
            original_word_count: 2,
            summary_word_count: 1,
            overlap_score: 0.5,
        });
        assert_eq!(ok.failure_message(), None);
    }
}
