//! Download requests.
//!
//! A [`DownloadRequest`] names what to fetch and where to put it. The
//! destination is either an existing directory, in which case the filename
//! is resolved from the URL and the server's headers, or a file path used
//! as-is.
//!
//! # Examples
//!
//! ```rust
//! use resumedl::download::DownloadRequest;
//! use resumedl::progress::ProgressSink;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Into a directory, letting the server name the file
//! let request = DownloadRequest::try_new("https://example.com/latest", "versions")?;
//!
//! // Into a directory, with a chosen name and no console output
//! let request = DownloadRequest::try_new("https://example.com/latest", "versions")?
//!     .with_filename("paper-1.20.4.jar")
//!     .with_progress(ProgressSink::Hidden);
//!
//! // Straight to a file path
//! let request = DownloadRequest::try_new("https://example.com/jdk.tar.gz", "runtime/runtime_dl")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::progress::ProgressSink;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::PathBuf;

/// Represents a file to be downloaded.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// URL of the file to download.
    pub url: Url,
    /// Directory to download into, or the target file itself.
    ///
    /// An empty path means the current working directory.
    pub destination: PathBuf,
    /// Preferred file name when `destination` is a directory.
    pub filename: Option<String>,
    /// Continue an existing partial file when the server allows it.
    pub resume: bool,
    /// Where progress is reported.
    pub progress: ProgressSink,
    /// Expected SHA-256 of the complete file, checked before promotion.
    pub sha256: Option<String>,
}

impl DownloadRequest {
    /// Creates a new [`DownloadRequest`] with resume enabled and console progress.
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
            filename: None,
            resume: true,
            progress: ProgressSink::default(),
            sha256: None,
        }
    }

    /// Parses `url` and creates a new [`DownloadRequest`].
    pub fn try_new(url: &str, destination: impl Into<PathBuf>) -> Result<Self> {
        let url = parse_url(url)?;
        Ok(Self::new(&url, destination))
    }

    /// Sets the preferred file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Enables or disables resuming.
    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }

    /// Sets the progress sink.
    pub fn with_progress(mut self, progress: ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Reports progress to `callback` instead of the console.
    pub fn on_progress<F>(self, callback: F) -> Self
    where
        F: Fn(u64, Option<u64>) + Send + Sync + 'static,
    {
        self.with_progress(ProgressSink::callback(callback))
    }

    /// Sets the expected SHA-256 digest (hex) of the complete file.
    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }
}

fn parse_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e)))?;
    check_url(&url)?;
    Ok(url)
}

fn check_url(url: &Url) -> Result<()> {
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(format!(
            "The url \"{}\" does not contain a valid path",
            url
        )));
    }
    Ok(())
}

impl TryFrom<&Url> for DownloadRequest {
    type Error = crate::error::Error;

    /// Downloads into the current working directory.
    fn try_from(value: &Url) -> Result<Self> {
        check_url(value)?;
        Ok(DownloadRequest::new(value, PathBuf::new()))
    }
}

impl TryFrom<&str> for DownloadRequest {
    type Error = crate::error::Error;

    /// Downloads into the current working directory.
    fn try_from(value: &str) -> Result<Self> {
        DownloadRequest::try_new(value, PathBuf::new())
    }
}
