use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a successful sign-up or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReply {
    pub message: String,
}

/// Body of a non-2xx response. Validation failures send `detail` as a list of
/// objects rather than a string, and some proxies answer with a bare JSON
/// scalar, so it is kept loose here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorReply {
    /// Any JSON document is accepted; only objects can carry a `detail`.
    pub fn from_json(body: &Value) -> Self {
        Self {
            detail: body.get("detail").cloned(),
        }
    }

    /// The detail text, untouched, when it is a non-empty string.
    pub fn detail_text(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}
