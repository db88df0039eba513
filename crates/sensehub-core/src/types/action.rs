//! Outcomes of actions taken on scored signals.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::scored::ScoredSignal;

/// The outcome of one action taken on a [`ScoredSignal`].
///
/// Holds the scored signal by shared ownership. `error` is populated only
/// on failure by convention — the acting plugin decides, the model only
/// offers the optionality.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    /// The scored signal acted upon.
    pub signal: Arc<ScoredSignal>,
    /// Free-form name of the action taken.
    pub action_type: String,
    /// Whether the action succeeded.
    pub success: bool,
    /// Action output, present on success.
    pub result_data: HashMap<String, serde_json::Value>,
    /// Error message, present only on failure.
    pub error: Option<String>,
}

impl ActionResult {
    /// Creates a successful action result.
    pub fn success(
        signal: Arc<ScoredSignal>,
        action_type: impl Into<String>,
        result_data: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            signal,
            action_type: action_type.into(),
            success: true,
            result_data,
            error: None,
        }
    }

    /// Creates a failed action result.
    pub fn failure(
        signal: Arc<ScoredSignal>,
        action_type: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            signal,
            action_type: action_type.into(),
            success: false,
            result_data: HashMap::new(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sense::Sense;
    use crate::types::signal::Signal;

    fn test_scored() -> Arc<ScoredSignal> {
        let signal = Arc::new(Signal::new(Sense::Sight, "test"));
        Arc::new(ScoredSignal::new(signal, 0.8, HashMap::new(), Vec::new()).unwrap())
    }

    #[test]
    fn test_success_has_no_error() {
        let result = ActionResult::success(test_scored(), "notify", HashMap::new());
        assert!(result.success);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_failure_carries_error() {
        let result = ActionResult::failure(test_scored(), "notify", "webhook unreachable");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("webhook unreachable"));
        assert!(result.result_data.is_empty());
    }

    #[test]
    fn test_scored_signal_shared() {
        let scored = test_scored();
        let result = ActionResult::success(Arc::clone(&scored), "log", HashMap::new());
        assert!(Arc::ptr_eq(&result.signal, &scored));
    }
}
