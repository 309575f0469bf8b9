//! Bridge payloads.
//!
//! Default substitution for absent fields happens here, at the
//! deserialization boundary - the policy core only ever receives
//! explicit values.

use serde::{Deserialize, Serialize};

use swipeback_policy::{BackDecision, CorrectiveAction};

/// Payload of the `enable_swipe_back` command.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableSwipeBackRequest {
    /// Absent means enable.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Absent means the unknown-page sentinel.
    #[serde(default)]
    pub current_page: String,
}

fn default_enabled() -> bool {
    true
}

/// Payload of the `handle_edge_swipe` command.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSwipeRequest {
    /// Horizontal translation since the gesture began, in points.
    pub translation_x: f64,
    /// Horizontal velocity at gesture end, in points per second.
    pub velocity_x: f64,
    #[serde(default)]
    pub current_page: String,
}

/// Response of the `check_back_navigation` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackNavigationCheck {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CorrectiveAction>,
}

impl From<BackDecision> for BackNavigationCheck {
    fn from(decision: BackDecision) -> Self {
        match decision {
            BackDecision::Allow => Self {
                allowed: true,
                action: None,
            },
            BackDecision::Suppress { action } => Self {
                allowed: false,
                action: Some(action),
            },
        }
    }
}
