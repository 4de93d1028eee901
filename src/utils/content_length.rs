//! Expected-size accounting for GET responses.

use reqwest::header::{HeaderMap, CONTENT_RANGE};
use reqwest::{Response, StatusCode};

/// Computes the total size of the resource once the GET response arrived.
///
/// A `206 Partial Content` body only covers the bytes after `offset`, so the
/// bytes already on disk are added back. A `200 OK` body is the whole
/// resource. Without a `Content-Length` the total is unknown.
///
/// # Example
///
/// ```rust
/// use reqwest::StatusCode;
/// use resumedl::utils::total_size;
///
/// assert_eq!(total_size(StatusCode::PARTIAL_CONTENT, Some(600), 400), Some(1000));
/// assert_eq!(total_size(StatusCode::OK, Some(1000), 0), Some(1000));
/// assert_eq!(total_size(StatusCode::OK, None, 0), None);
/// ```
pub fn total_size(status: StatusCode, content_length: Option<u64>, offset: u64) -> Option<u64> {
    let length = content_length?;
    if status == StatusCode::PARTIAL_CONTENT {
        Some(length.saturating_add(offset))
    } else {
        Some(length)
    }
}

/// Same as [`total_size`], reading the status and length from a response.
pub fn response_total_size(response: &Response, offset: u64) -> Option<u64> {
    total_size(response.status(), response.content_length(), offset)
}

/// First byte position announced by a `Content-Range: bytes <start>-<end>/<len>` header.
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE};
/// use resumedl::utils::content_range_start;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_RANGE, HeaderValue::from_static("bytes 400-999/1000"));
/// assert_eq!(content_range_start(&headers), Some(400));
/// ```
pub fn content_range_start(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(CONTENT_RANGE)?.to_str().ok()?;
    let (unit, range) = value.trim().split_once(' ')?;
    if !unit.eq_ignore_ascii_case("bytes") {
        return None;
    }
    let (start, _) = range.trim().split_once('-')?;
    start.trim().parse().ok()
}

/// Whether a response body begins at byte `offset` of the resource.
///
/// A `206` must announce `offset` in its `Content-Range`. Any other status
/// carries the whole resource and only matches an offset of zero.
pub fn body_starts_at(response: &Response, offset: u64) -> bool {
    if response.status() == StatusCode::PARTIAL_CONTENT {
        content_range_start(response.headers()) == Some(offset)
    } else {
        offset == 0
    }
}
