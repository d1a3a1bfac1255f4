//! ROUGE-1 scoring
//!
//! Unigram overlap between a generated summary (hypothesis) and its source
//! text (reference), computed the way the common Python `rouge` package
//! does it:
//!
//! 1. Split each text into sentences on `.`, dropping empty pieces
//! 2. Collapse whitespace inside each sentence and split it on spaces
//! 3. Compare the *sets* of unigrams (case-sensitive)
//!
//! Precision is overlap / hypothesis unigrams, recall is overlap / reference
//! unigrams, and F is `2PR / (P + R + 1e-8)`.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Scoring failures
///
/// Nothing in this module recovers from these; callers decide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Hypothesis is empty.")]
    EmptyHypothesis,

    #[error("Reference is empty.")]
    EmptyReference,
}

/// ROUGE-1 F-measure, precision and recall
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RougeScore {
    pub f: f64,
    pub p: f64,
    pub r: f64,
}

/// Overlap score of `summary` against `original` (ROUGE-1 F)
pub fn score(summary: &str, original: &str) -> Result<f64, ScoringError> {
    Ok(rouge_1(summary, original)?.f)
}

/// Full ROUGE-1 score of `hypothesis` against `reference`
pub fn rouge_1(hypothesis: &str, reference: &str) -> Result<RougeScore, ScoringError> {
    let hyp_sentences = sentences(hypothesis);
    if hyp_sentences.is_empty() {
        return Err(ScoringError::EmptyHypothesis);
    }
    let ref_sentences = sentences(reference);
    if ref_sentences.is_empty() {
        return Err(ScoringError::EmptyReference);
    }

    let hyp_unigrams = unigrams(&hyp_sentences);
    let ref_unigrams = unigrams(&ref_sentences);
    let overlap = hyp_unigrams.intersection(&ref_unigrams).count();

    Ok(f_p_r(hyp_unigrams.len(), ref_unigrams.len(), overlap))
}

/// Sentences with internal whitespace collapsed to single spaces
fn sentences(text: &str) -> Vec<String> {
    text.split('.')
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

/// Distinct words across all sentences
///
/// A whitespace-only sentence contributes the empty word.
fn unigrams(sentences: &[String]) -> HashSet<&str> {
    sentences
        .iter()
        .flat_map(|sentence| sentence.split(' '))
        .collect()
}

fn f_p_r(evaluated_count: usize, reference_count: usize, overlapping_count: usize) -> RougeScore {
    let p = if evaluated_count == 0 {
        0.0
    } else {
        overlapping_count as f64 / evaluated_count as f64
    };
    let r = if reference_count == 0 {
        0.0
    } else {
        overlapping_count as f64 / reference_count as f64
    };
    let f = 2.0 * ((p * r) / (p + r + 1e-8));

    RougeScore { f, p, r }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_partial_overlap() {
        let score = rouge_1("the cat sat", "the cat sat on the mat").unwrap();
        // hypothesis {the, cat, sat}, reference {the, cat, sat, on, mat}
        assert!((score.p - 1.0).abs() < EPSILON);
        assert!((score.r - 0.6).abs() < EPSILON);
        assert!((score.f - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_identical_texts_score_near_one() {
        let f = score("Rust is fast. Rust is safe.", "Rust is fast. Rust is safe.").unwrap();
        assert!(f > 0.999 && f <= 1.0);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        assert_eq!(score("alpha beta", "gamma delta").unwrap(), 0.0);
    }

    #[test]
    fn test_periods_split_words() {
        // "end.Start" is two words once split on '.'
        let s = rouge_1("end", "the end.Start").unwrap();
        assert!((s.r - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(score("Cat", "cat").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_inputs_fail() {
        assert_eq!(score("", "reference"), Err(ScoringError::EmptyHypothesis));
        assert_eq!(score("...", "reference"), Err(ScoringError::EmptyHypothesis));
        assert_eq!(score("summary", ""), Err(ScoringError::EmptyReference));
    }

    #[test]
    fn test_score_is_pure() {
        let summary = "A short summary of the text.";
        let original = "This is the text. It has a short summary somewhere.";
        assert_eq!(score(summary, original), score(summary, original));
    }
}
