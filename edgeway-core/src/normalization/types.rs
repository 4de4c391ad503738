use crate::event::EdgeRequest;
use http::StatusCode;

pub const REDIRECT_STATUS_DESCRIPTION: &str = "Moved permanently";

/// Outcome of a single normalizer invocation. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Stop at the edge and answer with a permanent redirect.
    Redirect(RedirectDecision),
    /// Continue to origin with the (possibly rewritten) request.
    PassThrough(NormalizedRequest),
}

impl Decision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Decision::Redirect(_))
    }

    pub fn redirect(&self) -> Option<&RedirectDecision> {
        match self {
            Decision::Redirect(redirect) => Some(redirect),
            Decision::PassThrough(_) => None,
        }
    }

    pub fn pass_through(&self) -> Option<&NormalizedRequest> {
        match self {
            Decision::PassThrough(request) => Some(request),
            Decision::Redirect(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectDecision {
    location: String,
}

impl RedirectDecision {
    pub(crate) fn moved_permanently(location: String) -> Self {
        Self { location }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::MOVED_PERMANENTLY
    }

    pub fn status_description(&self) -> &'static str {
        REDIRECT_STATUS_DESCRIPTION
    }

    /// Absolute `https` URL the client is sent to.
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// A request cleared for origin fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    request: EdgeRequest,
    original_uri: Option<String>,
}

impl NormalizedRequest {
    pub(crate) fn unchanged(request: EdgeRequest) -> Self {
        Self {
            request,
            original_uri: None,
        }
    }

    pub(crate) fn rewritten(mut request: EdgeRequest, uri: String) -> Self {
        let original = std::mem::replace(&mut request.uri, uri);
        Self {
            request,
            original_uri: Some(original),
        }
    }

    pub fn uri(&self) -> &str {
        &self.request.uri
    }

    /// The uri as received, when the normalizer rewrote it.
    pub fn original_uri(&self) -> Option<&str> {
        self.original_uri.as_deref()
    }

    pub fn was_rewritten(&self) -> bool {
        self.original_uri.is_some()
    }

    pub fn request(&self) -> &EdgeRequest {
        &self.request
    }

    pub fn into_inner(self) -> EdgeRequest {
        self.request
    }
}
