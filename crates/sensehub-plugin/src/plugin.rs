//! The hook contract all plugins implement.

use std::sync::Arc;

use sensehub_core::result::AppResult;
use sensehub_core::types::{ActionResult, ScoredSignal, Signal};

use crate::hooks::definitions::HookPoint;

/// Trait that all plugins must implement.
///
/// A plugin opts into hooks by listing them in [`Plugin::declared_hooks`];
/// dispatch consults only that declared set. Overriding a hook method
/// without declaring the hook means the method is never invoked — the
/// plugin is silently skipped for that hook. This keeps "has a method with
/// this name" distinct from "offers this capability" and prevents
/// accidental activation.
///
/// Every hook method has a declining default body, so implementers
/// override exactly the methods they declare. A hook method returning
/// `Err` aborts the whole fan-out call: the dispatcher performs no
/// catching, wrapping, or retrying.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// The hooks this plugin implements. Computed once at registration.
    fn declared_hooks(&self) -> Vec<HookPoint>;

    /// Visual detection. Empty vec means nothing detected.
    fn detect_sight(&self, source: &str) -> AppResult<Vec<Signal>> {
        let _ = source;
        Ok(Vec::new())
    }

    /// Audio/textual detection.
    fn detect_hearing(&self, source: &str) -> AppResult<Vec<Signal>> {
        let _ = source;
        Ok(Vec::new())
    }

    /// Physical/interaction detection.
    fn detect_touch(&self, source: &str) -> AppResult<Vec<Signal>> {
        let _ = source;
        Ok(Vec::new())
    }

    /// Quality/sampling detection.
    fn detect_taste(&self, source: &str) -> AppResult<Vec<Signal>> {
        let _ = source;
        Ok(Vec::new())
    }

    /// Pattern/anomaly detection.
    fn detect_smell(&self, source: &str) -> AppResult<Vec<Signal>> {
        let _ = source;
        Ok(Vec::new())
    }

    /// Scores one signal. `Ok(None)` means this plugin declines to score.
    fn score_signal(&self, signal: Arc<Signal>) -> AppResult<Option<ScoredSignal>> {
        let _ = signal;
        Ok(None)
    }

    /// Acts on one scored signal. `Ok(None)` means this plugin declines.
    fn execute_action(&self, scored: Arc<ScoredSignal>) -> AppResult<Option<ActionResult>> {
        let _ = scored;
        Ok(None)
    }
}
