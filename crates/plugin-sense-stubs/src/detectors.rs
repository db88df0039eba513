//! Stub detectors, one per sense.
//!
//! Each stub declares exactly one detection hook and returns a single
//! signal tagged with its sense, echoing the caller-supplied source.

use serde_json::json;

use sensehub_core::result::AppResult;
use sensehub_core::types::{Sense, Signal};
use sensehub_plugin::{HookPoint, Plugin};

fn stub_signal(sense: Sense, source: &str, description: &str, plugin: &str) -> Signal {
    Signal::new(sense, source)
        .with_raw("description", json!(description))
        .with_raw("stub", json!(true))
        .with_metadata("plugin", json!(plugin))
}

/// Stub plugin for the Sight sense (visual detection).
#[derive(Debug)]
pub struct SightStub;

impl Plugin for SightStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::DetectSight]
    }

    fn detect_sight(&self, source: &str) -> AppResult<Vec<Signal>> {
        Ok(vec![stub_signal(
            Sense::Sight,
            source,
            "Stub visual signal detected",
            "SightStub",
        )])
    }
}

/// Stub plugin for the Hearing sense (audio/text detection).
#[derive(Debug)]
pub struct HearingStub;

impl Plugin for HearingStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::DetectHearing]
    }

    fn detect_hearing(&self, source: &str) -> AppResult<Vec<Signal>> {
        Ok(vec![stub_signal(
            Sense::Hearing,
            source,
            "Stub audio signal detected",
            "HearingStub",
        )])
    }
}

/// Stub plugin for the Touch sense (interaction detection).
#[derive(Debug)]
pub struct TouchStub;

impl Plugin for TouchStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::DetectTouch]
    }

    fn detect_touch(&self, source: &str) -> AppResult<Vec<Signal>> {
        Ok(vec![stub_signal(
            Sense::Touch,
            source,
            "Stub interaction signal detected",
            "TouchStub",
        )])
    }
}

/// Stub plugin for the Taste sense (quality/sampling detection).
#[derive(Debug)]
pub struct TasteStub;

impl Plugin for TasteStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::DetectTaste]
    }

    fn detect_taste(&self, source: &str) -> AppResult<Vec<Signal>> {
        Ok(vec![stub_signal(
            Sense::Taste,
            source,
            "Stub quality signal detected",
            "TasteStub",
        )])
    }
}

/// Stub plugin for the Smell sense (pattern/anomaly detection).
#[derive(Debug)]
pub struct SmellStub;

impl Plugin for SmellStub {
    fn declared_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::DetectSmell]
    }

    fn detect_smell(&self, source: &str) -> AppResult<Vec<Signal>> {
        Ok(vec![stub_signal(
            Sense::Smell,
            source,
            "Stub anomaly signal detected",
            "SmellStub",
        )])
    }
}
