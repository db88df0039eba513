//! The closed set of sense categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Category a detection belongs to.
///
/// Five detection senses plus `Action`, which exists only as a category tag
/// for action-stage records and is never a detection sense. The set is
/// closed: it is never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sense {
    /// Visual detection.
    Sight,
    /// Audio/textual detection.
    Hearing,
    /// Physical/interaction detection.
    Touch,
    /// Quality/sampling detection.
    Taste,
    /// Pattern/anomaly detection.
    Smell,
    /// Action stage (not a detection sense).
    Action,
}

impl Sense {
    /// Returns the stable string name of this sense.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sight => "sight",
            Self::Hearing => "hearing",
            Self::Touch => "touch",
            Self::Taste => "taste",
            Self::Smell => "smell",
            Self::Action => "action",
        }
    }

    /// The five detection senses, in canonical order. Excludes `Action`.
    pub fn detection_senses() -> [Sense; 5] {
        [
            Self::Sight,
            Self::Hearing,
            Self::Touch,
            Self::Taste,
            Self::Smell,
        ]
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sense {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sight" => Ok(Self::Sight),
            "hearing" => Ok(Self::Hearing),
            "touch" => Ok(Self::Touch),
            "taste" => Ok(Self::Taste),
            "smell" => Ok(Self::Smell),
            "action" => Ok(Self::Action),
            other => Err(AppError::validation(format!("Unknown sense '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for sense in [
            Sense::Sight,
            Sense::Hearing,
            Sense::Touch,
            Sense::Taste,
            Sense::Smell,
            Sense::Action,
        ] {
            assert_eq!(sense.as_str().parse::<Sense>().unwrap(), sense);
        }
    }

    #[test]
    fn test_detection_senses_exclude_action() {
        assert!(!Sense::detection_senses().contains(&Sense::Action));
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!("sixth_sense".parse::<Sense>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Sense::Sight).unwrap();
        assert_eq!(json, "\"sight\"");
    }
}
