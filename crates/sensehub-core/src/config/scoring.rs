//! Keyword scoring configuration.

use serde::{Deserialize, Serialize};

/// Keyword lists for the keyword scoring plugin.
///
/// The three tiers carry fixed weights (+0.3 / +0.2 / +0.1 per distinct
/// matched keyword); only the lists themselves are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Keywords scoring +0.3 each.
    #[serde(default = "default_high_priority")]
    pub high_priority: Vec<String>,
    /// Keywords scoring +0.2 each.
    #[serde(default = "default_medium_priority")]
    pub medium_priority: Vec<String>,
    /// Keywords scoring +0.1 each.
    #[serde(default = "default_low_priority")]
    pub low_priority: Vec<String>,
}

fn default_high_priority() -> Vec<String> {
    ["urgent", "critical", "blocker", "emergency", "broken"]
        .map(String::from)
        .to_vec()
}

fn default_medium_priority() -> Vec<String> {
    ["bug", "issue", "problem", "error", "failure"]
        .map(String::from)
        .to_vec()
}

fn default_low_priority() -> Vec<String> {
    ["todo", "improvement", "enhancement", "minor", "question"]
        .map(String::from)
        .to_vec()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_priority: default_high_priority(),
            medium_priority: default_medium_priority(),
            low_priority: default_low_priority(),
        }
    }
}
