//! Registration-order guarantees of the fan-out dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use sensehub_core::result::AppResult;
use sensehub_core::types::{ActionResult, ScoredSignal, Sense, Signal};
use sensehub_plugin::{HookPoint, Plugin, PluginManager};

/// Scorer that stamps its label into the opinion's tags.
#[derive(Debug)]
struct LabelledScorer {
    label: &'static str,
    score: f64,
}

impl Plugin for LabelledScorer {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::ScoreSignal]
    }

    fn score_signal(&self, signal: Arc<Signal>) -> AppResult<Option<ScoredSignal>> {
        Ok(Some(ScoredSignal::new(
            signal,
            self.score,
            HashMap::new(),
            vec![self.label.to_string()],
        )?))
    }
}

/// Actor that names its results after its label.
#[derive(Debug)]
struct LabelledActor {
    label: &'static str,
}

impl Plugin for LabelledActor {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::ExecuteAction]
    }

    fn execute_action(&self, scored: Arc<ScoredSignal>) -> AppResult<Option<ActionResult>> {
        Ok(Some(ActionResult::success(scored, self.label, HashMap::new())))
    }
}

#[test]
fn score_results_follow_registration_order() {
    let manager = PluginManager::new();
    manager
        .register_plugin(
            Arc::new(LabelledScorer {
                label: "a",
                score: 0.9,
            }),
            Some("a"),
        )
        .unwrap();
    manager
        .register_plugin(
            Arc::new(LabelledScorer {
                label: "b",
                score: 0.1,
            }),
            Some("b"),
        )
        .unwrap();

    let signal = Arc::new(Signal::new(Sense::Sight, "src"));
    let opinions = manager.score_signal(signal).unwrap();

    // A registered first, so A's opinion comes first regardless of score
    assert_eq!(opinions.len(), 2);
    assert_eq!(opinions[0].tags(), ["a"]);
    assert_eq!(opinions[1].tags(), ["b"]);
}

#[test]
fn unregistering_the_first_scorer_promotes_the_second() {
    let manager = PluginManager::new();
    let a: Arc<dyn Plugin> = Arc::new(LabelledScorer {
        label: "a",
        score: 0.9,
    });
    manager.register_plugin(Arc::clone(&a), Some("a")).unwrap();
    manager
        .register_plugin(
            Arc::new(LabelledScorer {
                label: "b",
                score: 0.1,
            }),
            Some("b"),
        )
        .unwrap();

    manager.unregister_plugin(&a).unwrap();

    let signal = Arc::new(Signal::new(Sense::Sight, "src"));
    let opinions = manager.score_signal(signal).unwrap();
    assert_eq!(opinions.len(), 1);
    assert_eq!(opinions[0].tags(), ["b"]);
}

#[test]
fn action_results_follow_registration_order() {
    let manager = PluginManager::new();
    manager
        .register_plugin(Arc::new(LabelledActor { label: "notify" }), Some("notify"))
        .unwrap();
    manager
        .register_plugin(Arc::new(LabelledActor { label: "archive" }), Some("archive"))
        .unwrap();

    let signal = Arc::new(Signal::new(Sense::Hearing, "mic"));
    let scored = Arc::new(ScoredSignal::new(signal, 0.7, HashMap::new(), Vec::new()).unwrap());
    let results = manager.execute_action(scored).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].action_type, "notify");
    assert_eq!(results[1].action_type, "archive");
    assert!(results.iter().all(|r| r.success));
}

#[test]
fn list_plugins_reflects_registration_order_and_names() {
    let manager = PluginManager::new();
    manager
        .register_plugin(
            Arc::new(LabelledScorer {
                label: "a",
                score: 0.5,
            }),
            Some("first"),
        )
        .unwrap();
    manager
        .register_plugin(
            Arc::new(LabelledScorer {
                label: "b",
                score: 0.5,
            }),
            None,
        )
        .unwrap();

    let listed = manager.list_plugins();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].1.as_deref(), Some("first"));
    assert_eq!(listed[1].1, None);
    assert_eq!(manager.plugin_count(), 2);
}
