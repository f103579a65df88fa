//! Gate-in quality-control scoring

use serde::{Deserialize, Serialize};

/// Score at or above which an arriving lot is labelled accepted
pub const ACCEPT_THRESHOLD: u8 = 70;

/// Minimum score for the fast-track hint
pub const FAST_TRACK_MIN_SCORE: u8 = 85;

/// Minimum remaining shelf-life for the fast-track hint, in days
pub const FAST_TRACK_MIN_SHELF_DAYS: u32 = 6;

/// Bruising severity observed at gate-in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BruisingSeverity {
    #[default]
    None,
    Mild,
    High,
}

impl BruisingSeverity {
    /// Score penalty for this severity
    pub fn penalty(&self) -> f64 {
        match self {
            BruisingSeverity::None => 0.0,
            BruisingSeverity::Mild => 10.0,
            BruisingSeverity::High => 25.0,
        }
    }
}

impl std::fmt::Display for BruisingSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BruisingSeverity::None => write!(f, "None"),
            BruisingSeverity::Mild => write!(f, "Mild"),
            BruisingSeverity::High => write!(f, "High"),
        }
    }
}

/// Ephemeral gate-in assessment, recomputed on every input change
///
/// Never persisted and never written back to the lot's stored score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GateInAssessment {
    pub temp_in_tolerance: bool,
    pub mold_present: bool,
    pub bruising: BruisingSeverity,
    /// Declared-vs-weighed difference in kilograms
    pub weight_difference_kg: f64,
}

impl Default for GateInAssessment {
    fn default() -> Self {
        Self {
            temp_in_tolerance: true,
            mold_present: false,
            bruising: BruisingSeverity::None,
            weight_difference_kg: 0.0,
        }
    }
}

impl GateInAssessment {
    /// Deterministic 0-100 score over the four inputs
    pub fn score(&self) -> u8 {
        let mut score = 100.0;
        if !self.temp_in_tolerance {
            score -= 25.0;
        }
        if self.mold_present {
            score -= 30.0;
        }
        score -= self.bruising.penalty();
        // max-then-min rather than clamp: a NaN weight difference from the
        // boundary must degrade to a zero penalty, not a panic
        score -= (self.weight_difference_kg / 10.0).max(0.0).min(20.0);
        score.round().max(0.0) as u8
    }

    /// Display label for the current score
    pub fn decision(&self) -> QcDecision {
        if self.score() >= ACCEPT_THRESHOLD {
            QcDecision::Accepted
        } else {
            QcDecision::Rejected
        }
    }
}

/// Advisory accept/reject label shown on the gate-in page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QcDecision {
    Accepted,
    Rejected,
}

impl std::fmt::Display for QcDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QcDecision::Accepted => write!(f, "Accepted"),
            QcDecision::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Whether a scored lot qualifies for the advisory fast-track hint
///
/// Descriptive text only; nothing routes on this.
pub fn is_fast_track_candidate(score: u8, shelf_life_days: u32) -> bool {
    score >= FAST_TRACK_MIN_SCORE && shelf_life_days >= FAST_TRACK_MIN_SHELF_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_good_inputs_score_100() {
        let assessment = GateInAssessment::default();
        assert_eq!(assessment.score(), 100);
        assert_eq!(assessment.decision(), QcDecision::Accepted);
    }

    #[test]
    fn test_worst_case_floors_at_zero() {
        let assessment = GateInAssessment {
            temp_in_tolerance: false,
            mold_present: true,
            bruising: BruisingSeverity::High,
            weight_difference_kg: 500.0,
        };
        // 100 - 25 - 30 - 25 - 20 = 0
        assert_eq!(assessment.score(), 0);
        assert_eq!(assessment.decision(), QcDecision::Rejected);
    }

    #[test]
    fn test_weight_penalty_caps_at_20() {
        let capped = GateInAssessment {
            weight_difference_kg: 1000.0,
            ..Default::default()
        };
        assert_eq!(capped.score(), 80);
    }

    #[test]
    fn test_negative_weight_difference_is_not_a_bonus() {
        let assessment = GateInAssessment {
            weight_difference_kg: -50.0,
            ..Default::default()
        };
        assert_eq!(assessment.score(), 100);
    }

    #[test]
    fn test_mild_bruising_penalty() {
        let assessment = GateInAssessment {
            bruising: BruisingSeverity::Mild,
            ..Default::default()
        };
        assert_eq!(assessment.score(), 90);
    }

    #[test]
    fn test_fast_track_hint_thresholds() {
        assert!(is_fast_track_candidate(85, 6));
        assert!(is_fast_track_candidate(100, 9));
        assert!(!is_fast_track_candidate(84, 9));
        assert!(!is_fast_track_candidate(92, 5));
    }

    proptest! {
        /// The score lands in [0, 100] for any combination of inputs.
        #[test]
        fn prop_score_in_range(
            temp_in_tolerance in proptest::bool::ANY,
            mold_present in proptest::bool::ANY,
            bruising_idx in 0u8..3,
            weight_difference_kg in -10_000.0f64..10_000.0,
        ) {
            let bruising = match bruising_idx {
                0 => BruisingSeverity::None,
                1 => BruisingSeverity::Mild,
                _ => BruisingSeverity::High,
            };
            let assessment = GateInAssessment {
                temp_in_tolerance,
                mold_present,
                bruising,
                weight_difference_kg,
            };
            prop_assert!(assessment.score() <= 100);
        }
    }
}
