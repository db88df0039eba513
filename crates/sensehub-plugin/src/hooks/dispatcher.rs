//! Hook dispatcher — fans one call out to every declared plugin.
//!
//! For detection hooks each plugin contributes a sequence of signals; the
//! aggregate flattens those sequences, preserving plugin registration
//! order and intra-plugin element order.
//!
//! For scoring/action hooks each plugin contributes at most one result;
//! declines (`None`) are filtered out and registration order is preserved.
//!
//! There is no per-plugin error isolation: an `Err` from any invoked
//! plugin aborts the fan-out and propagates to the caller verbatim.

use std::sync::Arc;

use tracing::debug;

use sensehub_core::error::AppError;
use sensehub_core::result::AppResult;
use sensehub_core::types::{ActionResult, ScoredSignal, Signal};

use super::definitions::HookPoint;
use super::registry::HookRegistry;
use crate::plugin::Plugin;

/// Dispatches hooks to all registered plugins that declared them.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Fans a detection hook out to every plugin that declared it and
    /// flattens the per-plugin signal batches into one ordered sequence.
    ///
    /// Fails if `hook` is not a detection hook. With zero qualifying
    /// plugins the aggregate is empty, never an error.
    pub fn dispatch_detect(&self, hook: HookPoint, source: &str) -> AppResult<Vec<Signal>> {
        if !hook.is_detect() {
            return Err(AppError::plugin(format!(
                "Hook '{hook}' is not a detection hook"
            )));
        }

        let handlers = self.registry.handlers_for(hook);
        debug!(hook = %hook, source, handler_count = handlers.len(), "Dispatching detection hook");

        let mut signals = Vec::new();
        for plugin in &handlers {
            let batch = match hook {
                HookPoint::DetectSight => plugin.detect_sight(source)?,
                HookPoint::DetectHearing => plugin.detect_hearing(source)?,
                HookPoint::DetectTouch => plugin.detect_touch(source)?,
                HookPoint::DetectTaste => plugin.detect_taste(source)?,
                HookPoint::DetectSmell => plugin.detect_smell(source)?,
                HookPoint::ScoreSignal | HookPoint::ExecuteAction => unreachable!(),
            };
            signals.extend(batch);
        }

        Ok(signals)
    }

    /// Fans the scoring hook out to every declared scorer. Each plugin
    /// contributes at most one opinion; declines are dropped.
    pub fn dispatch_score(&self, signal: Arc<Signal>) -> AppResult<Vec<ScoredSignal>> {
        let handlers = self.registry.handlers_for(HookPoint::ScoreSignal);
        debug!(
            sense = %signal.sense,
            source = %signal.source,
            handler_count = handlers.len(),
            "Dispatching scoring hook"
        );

        let mut scored = Vec::new();
        for plugin in &handlers {
            if let Some(opinion) = plugin.score_signal(Arc::clone(&signal))? {
                scored.push(opinion);
            }
        }

        Ok(scored)
    }

    /// Fans the action hook out to every declared actor. Each plugin
    /// contributes at most one result; declines are dropped.
    pub fn dispatch_action(&self, scored: Arc<ScoredSignal>) -> AppResult<Vec<ActionResult>> {
        let handlers = self.registry.handlers_for(HookPoint::ExecuteAction);
        debug!(
            score = scored.score(),
            handler_count = handlers.len(),
            "Dispatching action hook"
        );

        let mut results = Vec::new();
        for plugin in &handlers {
            if let Some(result) = plugin.execute_action(Arc::clone(&scored))? {
                results.push(result);
            }
        }

        Ok(results)
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}
