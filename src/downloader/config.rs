//! Configuration for the downloader.
//!
//! A [`DownloaderConfig`] is fixed when the [`Downloader`](super::Downloader)
//! is built. It only describes the HTTP client: headers, timeout, transport
//! retries and proxy. Everything that varies per file lives on the
//! [`DownloadRequest`](crate::download::DownloadRequest).
//!
//! # Examples
//!
//! ```rust
//! use resumedl::downloader::{Downloader, DownloaderConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), resumedl::Error> {
//! let config = DownloaderConfig {
//!     timeout: Duration::from_secs(60),
//!     ..DownloaderConfig::default()
//! };
//! let downloader = Downloader::new(config)?;
//! # Ok(())
//! # }
//! ```

use crate::http::client::{default_headers, HttpClientConfig, DEFAULT_TIMEOUT};

use reqwest::header::HeaderMap;
use reqwest::Proxy;
use std::time::Duration;

/// Configuration structure for the downloader.
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Headers sent with every request. Defaults to browser-like headers.
    pub headers: HeaderMap,
    /// Connect and read timeout.
    pub timeout: Duration,
    /// Retries for transient transport failures. Status errors are never retried.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            headers: default_headers(),
            timeout: DEFAULT_TIMEOUT,
            retries: 0,
            proxy: None,
        }
    }
}

impl DownloaderConfig {
    /// Returns the matching HTTP client configuration.
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            retries: self.retries,
            proxy: self.proxy.clone(),
            headers: self.headers.clone(),
            timeout: self.timeout,
        }
    }
}
