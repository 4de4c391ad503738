/// Substring whose presence anywhere in the host triggers the redirect.
pub const WWW_MARKER: &str = "www";

/// Prefix removed from the host when computing the canonical domain.
pub const WWW_PREFIX: &str = "www.";

/// Whether `host` should be redirected to its canonical domain.
///
/// This is a containment test, case-sensitive, and deliberately broader than
/// [`canonical_domain`]: `api.wwwexample.com` triggers the redirect even though
/// nothing gets stripped from it.
pub fn is_www_host(host: &str) -> bool {
    host.contains(WWW_MARKER)
}

/// `host` with a single leading `www.` removed.
pub fn canonical_domain(host: &str) -> &str {
    host.strip_prefix(WWW_PREFIX).unwrap_or(host)
}

pub fn https_location(domain: &str, uri: &str) -> String {
    format!("https://{domain}{uri}")
}
