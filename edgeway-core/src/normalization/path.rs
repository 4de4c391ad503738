pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";

/// A non-root uri ending in `/`.
pub fn has_trailing_slash(uri: &str) -> bool {
    uri != "/" && uri.ends_with('/')
}

/// Whether the final path segment carries an extension.
///
/// Purely syntactic: any `.` in the last segment counts. Trailing slashes are
/// ignored when locating the last segment, so `/foo.bar/` has one.
pub fn has_extension(uri: &str) -> bool {
    let trimmed = uri.trim_end_matches('/');
    let last_segment = match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    last_segment.contains('.')
}

/// Replace an optional trailing slash with `/<index_document>`.
///
/// `/posts/` and `/posts` both become `/posts/index.html`.
pub fn index_document_uri(uri: &str, index_document: &str) -> String {
    let without_slash = uri.strip_suffix('/').unwrap_or(uri);
    format!("{without_slash}/{index_document}")
}
