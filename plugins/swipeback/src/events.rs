use serde::Serialize;

use swipeback_policy::{CorrectiveAction, PageKey};

/// Emitted whenever a back attempt is swallowed on a suppressed page.
pub const SUPPRESSED_EVENT: &str = "swipeback:suppressed";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackSuppressedEvent {
    pub page: PageKey,
    pub action: CorrectiveAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_shape() {
        let event = BackSuppressedEvent {
            page: PageKey::normalize("cart/"),
            action: CorrectiveAction::ReplaceCurrentHistoryEntry,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["page"], "/cart");
        assert_eq!(json["action"], "replaceCurrentHistoryEntry");
    }
}
