use crate::event::{EdgeHeaders, EdgeRequest, EventError, HeaderEntry};
use crate::normalization::RedirectDecision;
use serde::{Deserialize, Serialize};

/// A response generated at the edge, returned instead of forwarding to origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResponse {
    pub status: String,
    pub status_description: String,
    pub headers: EdgeHeaders,
}

impl EdgeResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(http::header::LOCATION.as_str())
            .and_then(|entries| entries.first())
            .map(|entry| entry.value.as_str())
    }
}

impl From<RedirectDecision> for EdgeResponse {
    fn from(redirect: RedirectDecision) -> Self {
        let mut headers = EdgeHeaders::new();
        headers.insert(
            http::header::LOCATION.as_str().to_string(),
            vec![HeaderEntry::new("Location", redirect.location())],
        );

        Self {
            status: redirect.status().as_str().to_string(),
            status_description: redirect.status_description().to_string(),
            headers,
        }
    }
}

/// What the handler hands back to the edge platform.
///
/// Serialized untagged: a response object short-circuits the request, a
/// request object continues to origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandlerOutput {
    Response(EdgeResponse),
    Request(EdgeRequest),
}

impl HandlerOutput {
    pub fn to_json(&self) -> Result<String, EventError> {
        serde_json::to_string(self).map_err(EventError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String, EventError> {
        serde_json::to_string_pretty(self).map_err(EventError::Encode)
    }
}
