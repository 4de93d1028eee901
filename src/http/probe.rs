//! HEAD probe.
//!
//! Before committing to a transfer the downloader asks the server for the
//! resource metadata. Everything learned here is optional: a failed probe
//! simply means no resume, no header-derived filename and an unknown size
//! until the GET response says otherwise.

use reqwest::header::{
    HeaderMap, HeaderName, ACCEPT_RANGES, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// Metadata returned by a successful HEAD request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeInfo {
    /// The server declared `Accept-Ranges: bytes`.
    pub accepts_ranges: bool,
    /// Value of the `Content-Length` header.
    pub content_length: Option<u64>,
    /// Raw `Content-Disposition` header.
    pub content_disposition: Option<String>,
    /// Raw `Content-Type` header.
    pub content_type: Option<String>,
}

impl ProbeInfo {
    /// Extracts the probe metadata from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let text = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
        };

        Self {
            accepts_ranges: text(ACCEPT_RANGES)
                .map(|v| v.eq_ignore_ascii_case("bytes"))
                .unwrap_or(false),
            content_length: text(CONTENT_LENGTH).and_then(|v| v.parse::<u64>().ok()),
            content_disposition: text(CONTENT_DISPOSITION),
            content_type: text(CONTENT_TYPE),
        }
    }
}

/// Sends a HEAD request and returns its metadata.
///
/// Transport errors and non-success statuses both yield `None`.
pub async fn probe(client: &ClientWithMiddleware, url: &Url) -> Option<ProbeInfo> {
    let res = match client.head(url.clone()).send().await {
        Ok(res) => res,
        Err(e) => {
            debug!("HEAD {} failed, continuing without metadata: {}", url, e);
            return None;
        }
    };

    if !res.status().is_success() {
        debug!("HEAD {} answered {}, continuing without metadata", url, res.status());
        return None;
    }

    Some(ProbeInfo::from_headers(res.headers()))
}
