//! Ordered filename resolution.
//!
//! Each resolver looks at one signal and may propose a name. Resolvers run
//! in [`RESOLVERS`] order; the first proposal passing
//! [`is_valid_filename`] wins. When none does, [`fallback_filename`]
//! derives a deterministic name from the URL itself.

use super::content_disposition::parse_content_disposition;
use super::mime::{extension_from_content_type, DEFAULT_EXTENSION};
use super::safety::{is_valid_filename, sanitize_filename};
use crate::download::hash::url_digest;
use crate::http::ProbeInfo;

use reqwest::Url;
use tracing::debug;

/// Number of hex characters of the URL digest used in fallback names.
pub const FALLBACK_HASH_LEN: usize = 10;

/// Signals available when naming a download.
#[derive(Debug, Clone, Copy)]
pub struct FilenameContext<'a> {
    /// URL being downloaded.
    pub url: &'a Url,
    /// Name supplied by the caller, if any.
    pub requested: Option<&'a str>,
    /// Metadata from the HEAD probe, if it succeeded.
    pub probe: Option<&'a ProbeInfo>,
}

/// A single naming heuristic.
pub type Resolver = fn(&FilenameContext<'_>) -> Option<String>;

/// Resolvers in precedence order, labelled for logging.
pub const RESOLVERS: [(&str, Resolver); 4] = [
    ("caller", from_caller),
    ("content-disposition", from_content_disposition),
    ("url-path", from_url_path),
    ("query-parameter", from_query_parameter),
];

/// Resolves the filename for a download.
///
/// The result is always a single safe path component.
pub fn resolve_filename(ctx: &FilenameContext<'_>) -> String {
    for (source, resolver) in RESOLVERS {
        match resolver(ctx) {
            Some(candidate) if is_valid_filename(&candidate) => {
                let name = sanitize_filename(&candidate);
                debug!("Using filename {:?} from {}", name, source);
                return name;
            }
            Some(candidate) => debug!("Rejected unsafe filename {:?} from {}", candidate, source),
            None => {}
        }
    }

    let name = fallback_filename(ctx);
    debug!("Using fallback filename {:?}", name);
    name
}

/// Name explicitly requested by the caller.
pub fn from_caller(ctx: &FilenameContext<'_>) -> Option<String> {
    ctx.requested.map(String::from)
}

/// `filename*` or `filename` from the probed `Content-Disposition`.
pub fn from_content_disposition(ctx: &FilenameContext<'_>) -> Option<String> {
    ctx.probe?
        .content_disposition
        .as_deref()
        .and_then(parse_content_disposition)
}

/// Last segment of the URL path, percent-decoded.
pub fn from_url_path(ctx: &FilenameContext<'_>) -> Option<String> {
    let tail = ctx.url.path_segments()?.next_back()?;
    if tail.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(tail)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| tail.to_string());
    Some(decoded)
}

/// Value of the `file` query parameter.
pub fn from_query_parameter(ctx: &FilenameContext<'_>) -> Option<String> {
    let query = ctx.url.query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "file")
        .map(|(_, value)| value.into_owned())
}

/// `file_<digest>.<ext>`, digest taken from the URL, extension from the
/// probed `Content-Type`.
pub fn fallback_filename(ctx: &FilenameContext<'_>) -> String {
    let extension = ctx
        .probe
        .and_then(|p| p.content_type.as_deref())
        .map(extension_from_content_type)
        .unwrap_or(DEFAULT_EXTENSION);
    let digest = url_digest(ctx.url.as_str());
    format!("file_{}{}", &digest[..FALLBACK_HASH_LEN], extension)
}
