//! Shared, lockable policy handle.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::decision::{BackDecision, EdgeSwipeOutcome, SwipeSample};
use crate::policy::{CorrectiveAction, SwipeBackPolicy};

/// Clone-able handle over a mutex-guarded [`SwipeBackPolicy`].
///
/// For embedders whose gesture and navigation callbacks are not
/// confined to one thread. Each operation holds the lock for a single
/// set lookup, so a query never observes a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedPolicy {
    inner: Arc<Mutex<SwipeBackPolicy>>,
}

impl SharedPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&self, page: &str, enabled: bool) {
        self.lock().set_enabled(page, enabled);
    }

    pub fn disable(&self, page: &str) {
        self.lock().disable(page);
    }

    pub fn is_allowed(&self, page: &str) -> bool {
        self.lock().is_allowed(page)
    }

    pub fn on_suppressed_back(&self, page: &str) -> CorrectiveAction {
        self.lock().on_suppressed_back(page)
    }

    pub fn decide(&self, page: &str) -> BackDecision {
        self.lock().decide(page)
    }

    pub fn resolve_edge_swipe(&self, page: &str, sample: SwipeSample) -> EdgeSwipeOutcome {
        self.lock().resolve_edge_swipe(page, sample)
    }

    fn lock(&self) -> MutexGuard<'_, SwipeBackPolicy> {
        self.inner.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_visible_through_clones() {
        let shared = SharedPolicy::new();
        let writer = shared.clone();

        writer.set_enabled("/checkout", false);
        assert!(!shared.is_allowed("/checkout"));

        writer.set_enabled("/checkout", true);
        assert!(shared.is_allowed("/checkout"));
    }

    #[test]
    fn test_concurrent_queries_and_mutations() {
        let shared = SharedPolicy::new();
        let mut handles = Vec::new();

        for i in 0..8 {
            let policy = shared.clone();
            handles.push(std::thread::spawn(move || {
                let page = format!("/page/{i}");
                for _ in 0..100 {
                    policy.disable(&page);
                    assert!(!policy.is_allowed(&page));
                    policy.set_enabled(&page, true);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        for i in 0..8 {
            assert!(shared.is_allowed(&format!("/page/{i}")));
        }
    }

    #[test]
    fn test_decide_through_shared_handle() {
        let shared = SharedPolicy::new();
        shared.disable("/cart");

        assert_eq!(
            shared.decide("/cart"),
            BackDecision::Suppress {
                action: CorrectiveAction::ReplaceCurrentHistoryEntry
            }
        );
        assert_eq!(shared.decide("/home"), BackDecision::Allow);
    }
}
