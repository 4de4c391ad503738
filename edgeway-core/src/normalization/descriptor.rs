use crate::event::EdgeRequest;
use http::header::HOST;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("request has no host header")]
    MissingHost,

    #[error("request host header has no values")]
    EmptyHost,
}

/// A request with its host already resolved from the headers.
///
/// Construction is the only fallible step; once built, normalization cannot
/// fail.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    host: String,
    request: EdgeRequest,
}

impl RequestDescriptor {
    pub fn new(host: impl Into<String>, uri: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            request: EdgeRequest::new(host.clone(), uri),
            host,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn uri(&self) -> &str {
        &self.request.uri
    }

    pub fn request(&self) -> &EdgeRequest {
        &self.request
    }

    pub fn into_request(self) -> EdgeRequest {
        self.request
    }
}

impl TryFrom<EdgeRequest> for RequestDescriptor {
    type Error = DescriptorError;

    fn try_from(request: EdgeRequest) -> Result<Self, Self::Error> {
        let entries = request
            .header_entries(&HOST)
            .ok_or(DescriptorError::MissingHost)?;

        let host = entries
            .first()
            .map(|entry| entry.value.clone())
            .ok_or(DescriptorError::EmptyHost)?;

        Ok(Self { host, request })
    }
}
