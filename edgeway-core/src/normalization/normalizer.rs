use crate::conf::NormalizerConfig;
use crate::normalization::{
    DEFAULT_INDEX_DOCUMENT, Decision, NormalizedRequest, RedirectDecision, RequestDescriptor,
    RuleKind, Transition, TransitionAction, TransitionSink, canonical_domain, has_extension,
    has_trailing_slash, https_location, index_document_uri, is_www_host,
};

/// Normalize `request` with the default index document.
pub fn normalize(request: RequestDescriptor, sink: &dyn TransitionSink) -> Decision {
    Normalizer::default().normalize(request, sink)
}

/// Canonicalizes host and path ahead of an object-storage origin.
///
/// Rules run in a fixed order and the first one that fires decides:
///
/// 1. A host containing `www` is redirected to the host minus a leading `www.`,
///    keeping the uri as is.
/// 2. A non-root uri ending in `/` is redirected to the same path with the
///    index document appended.
/// 3. A uri whose last segment has no extension is rewritten in place to point
///    at the index document, and the request continues to origin.
/// 4. Anything else continues to origin untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    index_document: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            index_document: DEFAULT_INDEX_DOCUMENT.to_string(),
        }
    }
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            index_document: config.index_document.clone(),
        }
    }

    pub fn index_document(&self) -> &str {
        &self.index_document
    }

    pub fn normalize(&self, request: RequestDescriptor, sink: &dyn TransitionSink) -> Decision {
        let host = request.host();
        let uri = request.uri();
        let domain = canonical_domain(host);

        if is_www_host(host) {
            sink.record(&Transition {
                rule: RuleKind::CanonicalHost,
                action: TransitionAction::Redirect,
                from: host.to_string(),
                to: domain.to_string(),
            });

            return Decision::Redirect(RedirectDecision::moved_permanently(https_location(
                domain, uri,
            )));
        }

        if has_trailing_slash(uri) {
            let target = index_document_uri(uri, &self.index_document);

            sink.record(&Transition {
                rule: RuleKind::TrailingSlash,
                action: TransitionAction::Redirect,
                from: uri.to_string(),
                to: target.clone(),
            });

            return Decision::Redirect(RedirectDecision::moved_permanently(https_location(
                domain, &target,
            )));
        }

        if !has_extension(uri) {
            let target = index_document_uri(uri, &self.index_document);

            sink.record(&Transition {
                rule: RuleKind::CleanUrl,
                action: TransitionAction::Rewrite,
                from: uri.to_string(),
                to: target.clone(),
            });

            return Decision::PassThrough(NormalizedRequest::rewritten(
                request.into_request(),
                target,
            ));
        }

        Decision::PassThrough(NormalizedRequest::unchanged(request.into_request()))
    }
}
