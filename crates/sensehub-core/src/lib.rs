//! # sensehub-core
//!
//! Core crate for SenseHub. Contains configuration schemas, the pipeline
//! data model (senses, signals, scored signals, action results), and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other SenseHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::{ActionResult, ScoredSignal, Sense, Signal, SignalDraft};
