use crate::event::{EdgeRequest, EventError};
use serde::{Deserialize, Serialize};

/// Top-level event handed to the handler by the edge platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EdgeRecord>,
}

impl EdgeEvent {
    pub fn from_json(input: &str) -> Result<Self, EventError> {
        serde_json::from_str(input).map_err(EventError::Decode)
    }

    /// Wrap a single request in a one-record envelope.
    pub fn single(request: EdgeRequest) -> Self {
        Self {
            records: vec![EdgeRecord {
                cf: CfPayload {
                    config: None,
                    request,
                },
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub cf: CfPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CfConfig>,
    pub request: EdgeRequest,
}

/// Distribution metadata attached to each record. Used for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_domain_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
