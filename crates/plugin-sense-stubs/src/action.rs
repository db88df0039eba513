//! Stub action plugin.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use sensehub_core::result::AppResult;
use sensehub_core::types::{ActionResult, ScoredSignal};
use sensehub_plugin::{HookPoint, Plugin};

/// Stub action executor that always succeeds and records what it saw.
///
/// Real action plugins take meaningful actions based on the score; this
/// one exists to exercise the action fan-out.
#[derive(Debug)]
pub struct LogActionStub;

impl Plugin for LogActionStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::ExecuteAction]
    }

    fn execute_action(&self, scored: Arc<ScoredSignal>) -> AppResult<Option<ActionResult>> {
        let result_data = HashMap::from([
            (
                "description".to_string(),
                json!("Stub action executed successfully"),
            ),
            ("observed_score".to_string(), json!(scored.score())),
            ("stub".to_string(), json!(true)),
        ]);

        Ok(Some(ActionResult::success(
            scored,
            "stub_action",
            result_data,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sensehub_core::types::{Sense, Signal};

    #[test]
    fn test_always_succeeds_with_no_error() {
        let signal = Arc::new(Signal::new(Sense::Sight, "cam"));
        let scored =
            Arc::new(ScoredSignal::new(signal, 0.8, HashMap::new(), Vec::new()).unwrap());

        let result = LogActionStub
            .execute_action(Arc::clone(&scored))
            .unwrap()
            .unwrap();

        assert!(result.success);
        assert_eq!(result.action_type, "stub_action");
        assert!(result.error.is_none());
        assert_eq!(result.result_data["observed_score"], json!(0.8));
        assert!(Arc::ptr_eq(&result.signal, &scored));
    }
}
