//! Target URL validation.

use url::Url;

/// Returns true if `candidate` is an absolute `http` or `https` URL.
///
/// Any parse failure or other scheme (`ftp:`, `javascript:`, `mailto:`, ...)
/// yields false.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    parse_target_url(candidate).is_some()
}

/// Parses `candidate` as an absolute `http` or `https` URL.
///
/// The parser drops embedded tabs and newlines, punycodes hosts and
/// percent-encodes non-ASCII characters, so the serialized result is always
/// valid in a `Location` header. Store `url.as_str()`, never the raw input.
pub fn parse_target_url(candidate: &str) -> Option<Url> {
    Url::parse(candidate)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}
