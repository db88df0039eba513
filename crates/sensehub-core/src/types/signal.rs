//! Raw detected signals and batch construction.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sense::Sense;

/// One immutable unit of detected raw information.
///
/// Created exclusively by detection plugins (or test harnesses), never
/// mutated after creation, and consumed by scoring. The `source` is an
/// opaque identifier supplied by the caller — the core never invents one,
/// and an empty string is a legal source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Which sense detected this signal.
    pub sense: Sense,
    /// Caller-supplied source identifier.
    pub source: String,
    /// Detection time. Defaults to creation time.
    pub timestamp: DateTime<Utc>,
    /// Raw signal data keyed by string.
    #[serde(default)]
    pub raw_data: HashMap<String, serde_json::Value>,
    /// Free-form metadata. The core never reads it.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Signal {
    /// Creates a new signal stamped with the current time.
    pub fn new(sense: Sense, source: impl Into<String>) -> Self {
        Self {
            sense,
            source: source.into(),
            timestamp: Utc::now(),
            raw_data: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Inserts a raw data value.
    pub fn with_raw(mut self, key: &str, value: serde_json::Value) -> Self {
        self.raw_data.insert(key.to_string(), value);
        self
    }

    /// Inserts a metadata value.
    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Overrides the timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Creates multiple signals sharing a single timestamp.
    ///
    /// When `shared_timestamp` is `None` the clock is read exactly once and
    /// that one value is applied to every record in the batch. This is a
    /// performance contract for batch detection, not just a convenience.
    pub fn create_batch(
        drafts: Vec<SignalDraft>,
        shared_timestamp: Option<DateTime<Utc>>,
    ) -> Vec<Signal> {
        let ts = shared_timestamp.unwrap_or_else(Utc::now);
        drafts.into_iter().map(|draft| draft.at(ts)).collect()
    }
}

/// Partial signal record used for batch construction.
///
/// Carries everything a [`Signal`] does except the timestamp, which the
/// batch supplies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalDraft {
    /// Which sense detected this signal.
    pub sense: Sense,
    /// Caller-supplied source identifier.
    pub source: String,
    /// Raw signal data keyed by string.
    #[serde(default)]
    pub raw_data: HashMap<String, serde_json::Value>,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SignalDraft {
    /// Creates a new draft with empty data maps.
    pub fn new(sense: Sense, source: impl Into<String>) -> Self {
        Self {
            sense,
            source: source.into(),
            raw_data: HashMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Inserts a raw data value.
    pub fn with_raw(mut self, key: &str, value: serde_json::Value) -> Self {
        self.raw_data.insert(key.to_string(), value);
        self
    }

    /// Inserts a metadata value.
    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Finalizes the draft into a signal with the given timestamp.
    fn at(self, timestamp: DateTime<Utc>) -> Signal {
        Signal {
            sense: self.sense,
            source: self.source,
            timestamp,
            raw_data: self.raw_data,
            metadata: self.metadata,
        }
    }
}
