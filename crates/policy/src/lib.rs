//! Swipe-back policy engine for hybrid webview apps.
//!
//! Decides, per page, whether the "swipe from the screen edge to go
//! back" gesture is allowed, and what a shim must do when a back
//! attempt happens on a page that suppresses it. The crate is pure
//! domain logic: no I/O, no gesture-recognizer or webview types.
//! Platform shims (the Tauri plugin in this workspace, or any native
//! gesture handler) feed it opaque page strings and act on the
//! decisions it returns.
//!
//! Pages are allowed by default. A page suppresses the gesture only
//! while the most recent call for it asked for disabled.
//!
//! # Example
//!
//! ```
//! use swipeback_policy::{BackDecision, SwipeBackPolicy};
//!
//! let mut policy = SwipeBackPolicy::new();
//! policy.set_enabled("/checkout", false);
//!
//! assert!(!policy.is_allowed("/checkout"));
//! assert!(policy.is_allowed("/home"));
//! assert!(matches!(policy.decide("/checkout"), BackDecision::Suppress { .. }));
//! ```

mod decision;
mod page;
mod policy;
mod shared;

pub use decision::{
    BackDecision, EdgeSwipeOutcome, SwipeSample, BACK_SWIPE_MIN_TRANSLATION,
    BACK_SWIPE_MIN_VELOCITY,
};
pub use page::PageKey;
pub use policy::{CorrectiveAction, SwipeBackPolicy};
pub use shared::SharedPolicy;
