//! # plugin-keyword-scorer
//!
//! A SenseHub scoring plugin that scores signals by weighted keyword
//! matching over the signal's raw data.
//!
//! Scoring: each distinct matched high-priority keyword adds 0.3, medium
//! 0.2, low 0.1; the sum saturates at 1.0. Matching is case-insensitive
//! substring containment — a keyword that is a substring of a longer word
//! still matches.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Value, json};
use tracing::debug;

use sensehub_core::config::scoring::ScoringConfig;
use sensehub_core::result::AppResult;
use sensehub_core::types::{ScoredSignal, Signal};
use sensehub_plugin::{HookPoint, Plugin};

/// Score at or above which a signal is tagged `high_priority`.
const HIGH_PRIORITY_THRESHOLD: f64 = 0.7;
/// Score at or above which a signal is tagged `medium_priority`.
const MEDIUM_PRIORITY_THRESHOLD: f64 = 0.4;

/// Scores signals based on keyword matching in `raw_data`.
///
/// Keyword lists are fixed at construction; defaults cover common
/// issue-tracker vocabulary.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    high_priority: Vec<String>,
    medium_priority: Vec<String>,
    low_priority: Vec<String>,
}

impl KeywordScorer {
    /// Creates a scorer with the default keyword lists.
    pub fn new() -> Self {
        Self::from_config(&ScoringConfig::default())
    }

    /// Creates a scorer from a scoring configuration section.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            high_priority: config.high_priority.clone(),
            medium_priority: config.medium_priority.clone(),
            low_priority: config.low_priority.clone(),
        }
    }

    /// Creates a scorer with custom keyword lists.
    pub fn with_keywords(
        high_priority: Vec<String>,
        medium_priority: Vec<String>,
        low_priority: Vec<String>,
    ) -> Self {
        Self {
            high_priority,
            medium_priority,
            low_priority,
        }
    }

    /// Extracts the matching surface from a signal's raw data.
    ///
    /// String values are lowercased; arrays and objects are stringified
    /// and lowercased so nested keywords stay matchable; other scalars are
    /// ignored. Parts are joined with spaces.
    fn extract_text(data: &HashMap<String, Value>) -> String {
        let mut parts = Vec::new();
        for value in data.values() {
            match value {
                Value::String(s) => parts.push(s.to_lowercase()),
                Value::Array(_) | Value::Object(_) => {
                    parts.push(value.to_string().to_lowercase());
                }
                _ => {}
            }
        }
        parts.join(" ")
    }

    /// Distinct keywords from `keywords` contained in `text`.
    fn matches<'a>(keywords: &'a [String], text: &str) -> Vec<&'a str> {
        keywords
            .iter()
            .filter(|kw| text.contains(&kw.to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Calculates the score and analysis for a signal.
    fn calculate(&self, signal: &Signal) -> (f64, HashMap<String, Value>) {
        let text = Self::extract_text(&signal.raw_data);

        let high = Self::matches(&self.high_priority, &text);
        let medium = Self::matches(&self.medium_priority, &text);
        let low = Self::matches(&self.low_priority, &text);

        // Weights are tenths (3/2/1), so the sum stays exact in integers
        // before the single division. Saturates at 1.0.
        let tenths = 3 * high.len() + 2 * medium.len() + low.len();
        let score = (tenths as f64 / 10.0).min(1.0);

        let total_matches = high.len() + medium.len() + low.len();
        let analysis = HashMap::from([
            ("method".to_string(), json!("keyword_matching")),
            ("high_priority_matches".to_string(), json!(high)),
            ("medium_priority_matches".to_string(), json!(medium)),
            ("low_priority_matches".to_string(), json!(low)),
            ("total_matches".to_string(), json!(total_matches)),
        ]);

        (score, analysis)
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for KeywordScorer {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::ScoreSignal]
    }

    fn score_signal(&self, signal: Arc<Signal>) -> AppResult<Option<ScoredSignal>> {
        let (score, analysis) = self.calculate(&signal);

        let mut tags = Vec::new();
        if score >= HIGH_PRIORITY_THRESHOLD {
            tags.push("high_priority".to_string());
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            tags.push("medium_priority".to_string());
        } else {
            tags.push("low_priority".to_string());
        }

        if analysis["total_matches"] == json!(0) {
            tags.push("no_keywords".to_string());
        }

        debug!(
            source = %signal.source,
            score,
            tags = ?tags,
            "Keyword scoring applied"
        );

        Ok(Some(ScoredSignal::new(signal, score, analysis, tags)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sensehub_core::types::Sense;

    fn score_text(text: &str) -> ScoredSignal {
        let scorer = KeywordScorer::new();
        let signal = Arc::new(Signal::new(Sense::Hearing, "test").with_raw("text", json!(text)));
        scorer.score_signal(signal).unwrap().unwrap()
    }

    #[test]
    fn test_case_insensitive_matching() {
        let scored = score_text("URGENT CRITICAL BUG");
        // urgent (0.3) + critical (0.3) + bug (0.2)
        assert_eq!(scored.score(), 0.8);
        assert_eq!(scored.tags(), ["high_priority"]);
    }

    #[test]
    fn test_score_saturates_at_one() {
        let every_high = "urgent critical blocker emergency broken ".repeat(5);
        let scored = score_text(&every_high);
        assert_eq!(scored.score(), 1.0);
    }

    #[test]
    fn test_distinct_keywords_count_once() {
        // the same keyword appearing many times still matches once
        let scored = score_text("urgent urgent urgent urgent");
        assert_eq!(scored.score(), 0.3);
    }

    #[test]
    fn test_no_keywords_tag() {
        let scored = score_text("normal data with no matches");
        assert_eq!(scored.score(), 0.0);
        assert_eq!(scored.tags(), ["low_priority", "no_keywords"]);
        assert_eq!(scored.analysis()["total_matches"], json!(0));
    }

    #[test]
    fn test_low_priority_without_no_keywords_tag() {
        let scored = score_text("minor todo item");
        assert_eq!(scored.score(), 0.2);
        assert_eq!(scored.tags(), ["low_priority"]);
    }

    #[test]
    fn test_medium_priority_band() {
        // bug (0.2) + issue (0.2): 0.4 <= score < 0.7
        let scored = score_text("a bug and an issue");
        assert_eq!(scored.score(), 0.4);
        assert_eq!(scored.tags(), ["medium_priority"]);
    }

    #[test]
    fn test_substring_of_longer_word_matches() {
        // "bug" inside "debugging" counts — containment, not tokenization
        let scored = score_text("debugging session");
        assert_eq!(scored.score(), 0.2);
    }

    #[test]
    fn test_keywords_nested_in_collections_match() {
        let scorer = KeywordScorer::new();
        let signal = Arc::new(
            Signal::new(Sense::Smell, "test")
                .with_raw("items", json!(["all good", {"note": "URGENT fix needed"}])),
        );
        let scored = scorer.score_signal(signal).unwrap().unwrap();
        assert_eq!(scored.score(), 0.3);
    }

    #[test]
    fn test_non_string_scalars_ignored() {
        let scorer = KeywordScorer::new();
        let signal = Arc::new(
            Signal::new(Sense::Taste, "test")
                .with_raw("count", json!(42))
                .with_raw("ok", json!(true)),
        );
        let scored = scorer.score_signal(signal).unwrap().unwrap();
        assert_eq!(scored.score(), 0.0);
    }

    #[test]
    fn test_analysis_records_match_lists() {
        let scored = score_text("urgent bug todo");
        assert_eq!(scored.analysis()["method"], json!("keyword_matching"));
        assert_eq!(scored.analysis()["high_priority_matches"], json!(["urgent"]));
        assert_eq!(scored.analysis()["medium_priority_matches"], json!(["bug"]));
        assert_eq!(scored.analysis()["low_priority_matches"], json!(["todo"]));
        assert_eq!(scored.analysis()["total_matches"], json!(3));
    }

    #[test]
    fn test_custom_keyword_lists() {
        let scorer = KeywordScorer::with_keywords(
            vec!["outage".to_string()],
            Vec::new(),
            Vec::new(),
        );
        let signal =
            Arc::new(Signal::new(Sense::Sight, "test").with_raw("text", json!("total OUTAGE")));
        let scored = scorer.score_signal(signal).unwrap().unwrap();
        assert_eq!(scored.score(), 0.3);
        // default keywords no longer apply
        let signal =
            Arc::new(Signal::new(Sense::Sight, "test").with_raw("text", json!("urgent bug")));
        let scored = scorer.score_signal(signal).unwrap().unwrap();
        assert_eq!(scored.score(), 0.0);
    }

    #[test]
    fn test_scorer_references_input_signal() {
        let scorer = KeywordScorer::new();
        let signal = Arc::new(Signal::new(Sense::Touch, "test"));
        let scored = scorer.score_signal(Arc::clone(&signal)).unwrap().unwrap();
        assert!(Arc::ptr_eq(scored.signal(), &signal));
    }
}
