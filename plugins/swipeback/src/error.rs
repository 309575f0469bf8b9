use serde::{Serialize, Serializer};

#[derive(Debug, thiserror::Error)]
pub enum SwipeBackError {
    #[error("webview has no current URL")]
    NoCurrentUrl,
}

impl Serialize for SwipeBackError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
