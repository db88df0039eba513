//! Stub scoring plugin.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use sensehub_core::result::AppResult;
use sensehub_core::types::{ScoredSignal, Signal};
use sensehub_plugin::{HookPoint, Plugin};

/// Stub scorer applying a neutral 0.5 score to every signal.
///
/// Real scoring plugins implement domain-specific algorithms; this one
/// exists to exercise the scoring fan-out.
#[derive(Debug)]
pub struct FixedScoreStub;

impl Plugin for FixedScoreStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::ScoreSignal]
    }

    fn score_signal(&self, signal: Arc<Signal>) -> AppResult<Option<ScoredSignal>> {
        let analysis = HashMap::from([
            ("description".to_string(), json!("Stub scoring applied")),
            ("stub".to_string(), json!(true)),
        ]);

        Ok(Some(ScoredSignal::new(
            signal,
            0.5,
            analysis,
            vec!["stub".to_string()],
        )?))
    }
}
