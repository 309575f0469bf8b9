//! Page identity and normalization.

use serde::Serialize;

/// Normalized identity of a navigable page.
///
/// Keys are path-like: one leading slash, no trailing slash, so
/// `"/a"`, `"/a/"` and `"a"` all compare equal. The empty string is a
/// distinct sentinel meaning "unknown page" and is never promoted to
/// `"/"` - an unknown page must not collide with the root page.
///
/// The only constructor is [`PageKey::normalize`], so a key in hand is
/// always normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageKey(String);

impl PageKey {
    /// Normalize a raw page string into a key.
    ///
    /// Strips one trailing slash and enforces one leading slash.
    /// Idempotent and total over any input string.
    pub fn normalize(raw: &str) -> Self {
        if raw.is_empty() {
            return Self(String::new());
        }

        let trimmed = raw.strip_suffix('/').unwrap_or(raw);
        if trimmed.is_empty() {
            return Self("/".to_string());
        }

        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Whether this key is the "unknown page" sentinel.
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
