//! Pipeline data model.
//!
//! The pipeline is a chain of immutable snapshots: detection plugins create
//! [`Signal`]s, scoring plugins wrap them into [`ScoredSignal`]s, and action
//! plugins report [`ActionResult`]s. Nothing here is mutated after
//! construction; later stages hold earlier records by shared ownership.

pub mod action;
pub mod scored;
pub mod sense;
pub mod signal;

pub use action::ActionResult;
pub use scored::ScoredSignal;
pub use sense::Sense;
pub use signal::{Signal, SignalDraft};
