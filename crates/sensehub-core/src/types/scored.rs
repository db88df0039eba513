//! Signals carrying one scoring opinion.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::signal::Signal;
use crate::error::AppError;
use crate::result::AppResult;

/// A [`Signal`] after one scoring opinion has been applied.
///
/// Holds its signal by shared ownership — the signal is never copied or
/// mutated. The score is validated into `[0.0, 1.0]` at construction;
/// fields are private so no later clamping or mutation path exists.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSignal {
    signal: Arc<Signal>,
    score: f64,
    analysis: HashMap<String, serde_json::Value>,
    tags: Vec<String>,
}

impl ScoredSignal {
    /// Creates a scored signal.
    ///
    /// Fails with a validation error when the score is outside
    /// `[0.0, 1.0]` or NaN. Out-of-range scores are rejected, never
    /// clamped.
    pub fn new(
        signal: Arc<Signal>,
        score: f64,
        analysis: HashMap<String, serde_json::Value>,
        tags: Vec<String>,
    ) -> AppResult<Self> {
        if !(0.0..=1.0).contains(&score) {
            return Err(AppError::validation(format!(
                "Score {score} outside valid range [0.0, 1.0]"
            )));
        }

        Ok(Self {
            signal,
            score,
            analysis,
            tags,
        })
    }

    /// The signal this opinion scores.
    pub fn signal(&self) -> &Arc<Signal> {
        &self.signal
    }

    /// The normalized score in `[0.0, 1.0]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Diagnostic detail recorded by the scorer.
    pub fn analysis(&self) -> &HashMap<String, serde_json::Value> {
        &self.analysis
    }

    /// Classification tags, in the order the scorer emitted them.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
