//! Response header extraction.
//!
//! The controller only ever looks at two headers: `Content-Length`, used for
//! progress accounting, and `Content-Type`, used to pick a file extension.

use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};

/// Retrieve the declared body length of a response.
///
/// Returns `None` if the "content-length" header is missing, is not valid
/// ASCII, or its value is not an u64.
pub fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_declared_length)
}

/// Parse a `Content-Length` header value.
///
/// ```rust
/// use streamsave::http::parse_declared_length;
///
/// assert_eq!(parse_declared_length(" 2048 "), Some(2048));
/// assert_eq!(parse_declared_length("-1"), None);
/// ```
pub fn parse_declared_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

/// Retrieve the declared content type of a response, verbatim.
pub fn declared_content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}
