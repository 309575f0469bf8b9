//! Per-page swipe-back permission state.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use std::collections::HashSet;

use serde::Serialize;

use crate::page::PageKey;

/// Action a shim must perform after a back attempt was detected on a
/// page that suppresses the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CorrectiveAction {
    /// Overwrite the current history entry with itself. No visible
    /// navigation happens and the back stack keeps its depth.
    ReplaceCurrentHistoryEntry,
}

/// Arbiter of the swipe-back gesture.
///
/// Holds the set of pages for which the gesture is suppressed. The set
/// starts empty, lives for the app session and is never persisted.
/// Every operation normalizes the page string it receives (see
/// [`PageKey::normalize`]), is total over any string input, and runs in
/// constant time relative to the number of pages.
///
/// The struct itself is thread-agnostic; embedders with concurrent
/// callers wrap it in a mutex ([`crate::SharedPolicy`] or the host
/// framework's managed state).
#[derive(Debug, Default)]
pub struct SwipeBackPolicy {
    disabled: HashSet<PageKey>,
}

impl SwipeBackPolicy {
    /// Create a policy with no suppressed pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the back gesture for a page.
    ///
    /// Idempotent in both directions: enabling a page that was never
    /// disabled, or disabling one twice, is not an error.
    pub fn set_enabled(&mut self, page: &str, enabled: bool) {
        let key = PageKey::normalize(page);
        if enabled {
            self.disabled.remove(&key);
            tracing::debug!(page = key.as_str(), "swipe back enabled");
        } else {
            tracing::debug!(page = key.as_str(), "swipe back disabled");
            self.disabled.insert(key);
        }
    }

    /// Disable the back gesture for a page.
    ///
    /// Exactly `set_enabled(page, false)`; kept for callers whose
    /// bridge contract has no generic enable path.
    pub fn disable(&mut self, page: &str) {
        self.set_enabled(page, false);
    }

    /// Whether the back gesture is currently allowed for a page.
    ///
    /// Pages the policy was never told about are allowed. Pure query,
    /// safe to call once per gesture-recognizer state change.
    pub fn is_allowed(&self, page: &str) -> bool {
        !self.disabled.contains(&PageKey::normalize(page))
    }

    /// Corrective action for a back attempt that was detected on a
    /// suppressed page.
    ///
    /// Callers invoke this exactly when [`is_allowed`](Self::is_allowed)
    /// returned `false` for the same page.
    pub fn on_suppressed_back(&self, page: &str) -> CorrectiveAction {
        tracing::debug!(page = %PageKey::normalize(page), "back attempt suppressed");
        CorrectiveAction::ReplaceCurrentHistoryEntry
    }

    /// Number of pages currently suppressing the gesture.
    pub fn disabled_count(&self) -> usize {
        self.disabled.len()
    }
}
