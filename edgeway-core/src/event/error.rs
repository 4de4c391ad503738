use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to decode edge event: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode handler output: {0}")]
    Encode(#[source] serde_json::Error),
}
