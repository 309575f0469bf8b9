//! Back-attempt resolution.
//!
//! One-call forms of "query the policy, then fetch the corrective
//! action", plus the significance check that turns a raw edge swipe
//! into a back-navigation attempt.

use serde::Serialize;

use crate::policy::{CorrectiveAction, SwipeBackPolicy};

/// Minimum horizontal translation, in points, for a completed edge
/// swipe to count as a back-navigation attempt.
pub const BACK_SWIPE_MIN_TRANSLATION: f64 = 50.0;

/// Minimum horizontal velocity, in points per second, for a completed
/// edge swipe to count as a back-navigation attempt.
pub const BACK_SWIPE_MIN_VELOCITY: f64 = 300.0;

/// Horizontal drag measurements a host gesture source reports when an
/// edge swipe ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSample {
    /// Horizontal translation since the gesture began, in points.
    pub translation_x: f64,
    /// Horizontal velocity at gesture end, in points per second.
    pub velocity_x: f64,
}

impl SwipeSample {
    /// Whether the swipe was significant enough to mean "go back".
    pub fn is_back_intent(&self) -> bool {
        self.translation_x > BACK_SWIPE_MIN_TRANSLATION
            || self.velocity_x > BACK_SWIPE_MIN_VELOCITY
    }
}

/// Resolution of a detected back-navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BackDecision {
    /// Let the navigation proceed.
    Allow,
    /// Block it and perform the corrective action.
    Suppress { action: CorrectiveAction },
}

/// Resolution of a completed edge swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeSwipeOutcome {
    /// Trigger one back navigation.
    NavigateBack,
    /// The page suppresses the gesture; perform the corrective action.
    Suppressed { action: CorrectiveAction },
    /// The swipe was not significant enough; do nothing.
    Ignored,
}

impl SwipeBackPolicy {
    /// Resolve a detected back-navigation attempt on a page.
    pub fn decide(&self, page: &str) -> BackDecision {
        if self.is_allowed(page) {
            BackDecision::Allow
        } else {
            BackDecision::Suppress {
                action: self.on_suppressed_back(page),
            }
        }
    }

    /// Resolve a completed edge swipe on a page.
    ///
    /// Suppression wins over significance: a suppressed page swallows
    /// the swipe whether or not it would have counted as a back attempt.
    pub fn resolve_edge_swipe(&self, page: &str, sample: SwipeSample) -> EdgeSwipeOutcome {
        match self.decide(page) {
            BackDecision::Suppress { action } => EdgeSwipeOutcome::Suppressed { action },
            BackDecision::Allow if sample.is_back_intent() => EdgeSwipeOutcome::NavigateBack,
            BackDecision::Allow => EdgeSwipeOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(translation_x: f64, velocity_x: f64) -> SwipeSample {
        SwipeSample {
            translation_x,
            velocity_x,
        }
    }

    #[test]
    fn test_translation_alone_triggers_back_intent() {
        assert!(sample(51.0, 0.0).is_back_intent());
    }

    #[test]
    fn test_velocity_alone_triggers_back_intent() {
        assert!(sample(0.0, 301.0).is_back_intent());
    }

    #[test]
    fn test_weak_swipe_is_not_back_intent() {
        assert!(!sample(49.0, 299.0).is_back_intent());
        // Thresholds are exclusive.
        assert!(!sample(50.0, 300.0).is_back_intent());
    }

    #[test]
    fn test_decide_allows_untouched_page() {
        let policy = SwipeBackPolicy::new();
        assert_eq!(policy.decide("/home"), BackDecision::Allow);
    }

    #[test]
    fn test_decide_suppresses_disabled_page() {
        let mut policy = SwipeBackPolicy::new();
        policy.disable("/checkout");

        assert_eq!(
            policy.decide("/checkout"),
            BackDecision::Suppress {
                action: CorrectiveAction::ReplaceCurrentHistoryEntry
            }
        );
    }

    #[test]
    fn test_significant_swipe_navigates_back() {
        let policy = SwipeBackPolicy::new();
        assert_eq!(
            policy.resolve_edge_swipe("/home", sample(80.0, 0.0)),
            EdgeSwipeOutcome::NavigateBack
        );
    }

    #[test]
    fn test_weak_swipe_is_ignored() {
        let policy = SwipeBackPolicy::new();
        assert_eq!(
            policy.resolve_edge_swipe("/home", sample(10.0, 50.0)),
            EdgeSwipeOutcome::Ignored
        );
    }

    #[test]
    fn test_suppression_wins_over_significance() {
        let mut policy = SwipeBackPolicy::new();
        policy.disable("/checkout");

        assert_eq!(
            policy.resolve_edge_swipe("/checkout", sample(200.0, 900.0)),
            EdgeSwipeOutcome::Suppressed {
                action: CorrectiveAction::ReplaceCurrentHistoryEntry
            }
        );
    }

    #[test]
    fn test_decision_wire_shape() {
        let mut policy = SwipeBackPolicy::new();
        policy.disable("/checkout");

        let json = serde_json::to_value(policy.decide("/checkout")).unwrap();
        assert_eq!(json["type"], "suppress");
        assert_eq!(json["action"], "replaceCurrentHistoryEntry");
    }
}
