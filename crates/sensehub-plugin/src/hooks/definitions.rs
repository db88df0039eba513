//! All hook point definitions.

use serde::{Deserialize, Serialize};

use sensehub_core::types::Sense;

/// Enumeration of the seven hook points in the pipeline.
///
/// Each hook has a stable string name that plugins and diagnostics refer
/// to. Five detection hooks (one per sense), one scoring hook, one action
/// hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Visual detection of signals.
    DetectSight,
    /// Audio/textual detection of signals.
    DetectHearing,
    /// Physical/interaction detection of signals.
    DetectTouch,
    /// Quality/sampling detection of signals.
    DetectTaste,
    /// Pattern/anomaly detection of signals.
    DetectSmell,
    /// Scoring of one detected signal.
    ScoreSignal,
    /// Execution of an action on a scored signal.
    ExecuteAction,
}

impl HookPoint {
    /// Returns the stable string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DetectSight => "detect_sight",
            Self::DetectHearing => "detect_hearing",
            Self::DetectTouch => "detect_touch",
            Self::DetectTaste => "detect_taste",
            Self::DetectSmell => "detect_smell",
            Self::ScoreSignal => "score_signal",
            Self::ExecuteAction => "execute_action",
        }
    }

    /// Resolves a hook point from its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "detect_sight" => Some(Self::DetectSight),
            "detect_hearing" => Some(Self::DetectHearing),
            "detect_touch" => Some(Self::DetectTouch),
            "detect_taste" => Some(Self::DetectTaste),
            "detect_smell" => Some(Self::DetectSmell),
            "score_signal" => Some(Self::ScoreSignal),
            "execute_action" => Some(Self::ExecuteAction),
            _ => None,
        }
    }

    /// Returns whether this is a detection hook.
    pub fn is_detect(&self) -> bool {
        self.sense().is_some()
    }

    /// For detection hooks, the sense the hook detects.
    pub fn sense(&self) -> Option<Sense> {
        match self {
            Self::DetectSight => Some(Sense::Sight),
            Self::DetectHearing => Some(Sense::Hearing),
            Self::DetectTouch => Some(Sense::Touch),
            Self::DetectTaste => Some(Sense::Taste),
            Self::DetectSmell => Some(Sense::Smell),
            Self::ScoreSignal | Self::ExecuteAction => None,
        }
    }

    /// The detection hook for a given sense. `Sense::Action` has none.
    pub fn detect_for(sense: Sense) -> Option<Self> {
        match sense {
            Sense::Sight => Some(Self::DetectSight),
            Sense::Hearing => Some(Self::DetectHearing),
            Sense::Touch => Some(Self::DetectTouch),
            Sense::Taste => Some(Self::DetectTaste),
            Sense::Smell => Some(Self::DetectSmell),
            Sense::Action => None,
        }
    }

    /// All hook points, in canonical order.
    pub fn all() -> [HookPoint; 7] {
        [
            Self::DetectSight,
            Self::DetectHearing,
            Self::DetectTouch,
            Self::DetectTaste,
            Self::DetectSmell,
            Self::ScoreSignal,
            Self::ExecuteAction,
        ]
    }
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for hook in HookPoint::all() {
            assert_eq!(HookPoint::from_name(hook.as_str()), Some(hook));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(HookPoint::from_name("detect_proprioception"), None);
    }

    #[test]
    fn test_detect_hooks_carry_their_sense() {
        assert_eq!(HookPoint::DetectSight.sense(), Some(Sense::Sight));
        assert_eq!(HookPoint::DetectSmell.sense(), Some(Sense::Smell));
        assert_eq!(HookPoint::ScoreSignal.sense(), None);
        assert_eq!(HookPoint::ExecuteAction.sense(), None);
    }

    #[test]
    fn test_detect_for_every_detection_sense() {
        for sense in Sense::detection_senses() {
            let hook = HookPoint::detect_for(sense).unwrap();
            assert_eq!(hook.sense(), Some(sense));
        }
        assert_eq!(HookPoint::detect_for(Sense::Action), None);
    }
}
