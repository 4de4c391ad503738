use http::HeaderName;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single header value as the edge platform represents it.
///
/// `key` carries the original-case header name and is optional on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }
}

/// Lowercase header name to an ordered list of values.
pub type EdgeHeaders = BTreeMap<String, Vec<HeaderEntry>>;

/// The request object nested inside an edge event.
///
/// Only `uri` and `headers` are interpreted. Every other field the platform
/// sends (`method`, `querystring`, `clientIp`, ...) is kept in `extra` so a
/// pass-through response hands the request back exactly as received, modulo
/// the rewritten uri.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRequest {
    pub uri: String,

    #[serde(default)]
    pub headers: EdgeHeaders,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeRequest {
    /// Build a minimal request carrying only a host header and a uri.
    pub fn new(host: impl Into<String>, uri: impl Into<String>) -> Self {
        let mut headers = EdgeHeaders::new();
        headers.insert(
            http::header::HOST.as_str().to_string(),
            vec![HeaderEntry::new("Host", host)],
        );

        Self {
            uri: uri.into(),
            headers,
            extra: Map::new(),
        }
    }

    /// All entries recorded for `name`, if the header is present.
    pub fn header_entries(&self, name: &HeaderName) -> Option<&[HeaderEntry]> {
        self.headers.get(name.as_str()).map(Vec::as_slice)
    }

    /// First value recorded for `name`.
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.header_entries(name)
            .and_then(|entries| entries.first())
            .map(|entry| entry.value.as_str())
    }
}
