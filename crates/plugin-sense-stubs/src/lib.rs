//! # plugin-sense-stubs
//!
//! Reference stub plugins, one per pipeline role: five sense detectors, a
//! fixed-score scorer, and a logging action executor. Each sense is one
//! job — the stubs never mix pipeline roles.
//!
//! Real plugins should accept the source as a parameter (never hard-code
//! one) and return validated model objects, exactly as these stubs do.

mod action;
mod detectors;
mod scoring;

pub use action::LogActionStub;
pub use detectors::{HearingStub, SightStub, SmellStub, TasteStub, TouchStub};
pub use scoring::FixedScoreStub;
