//! resumedl downloads files over HTTP(S) so that the destination is never
//! observed half-written, interrupted transfers can be resumed, and files
//! dropped into a directory get a safe, deterministic name.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resumedl::{DownloadRequest, DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let downloader = DownloaderBuilder::new().build()?;
//! let request = DownloadRequest::try_new(
//!     "https://example.com/builds/paper-1.20.4.jar",
//!     "versions",
//! )?;
//!
//! let result = downloader.download(&request).await?;
//! println!("{:?} ({:.0} B/s)", result.path(), result.average_throughput());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - `DownloadRequest`, `DownloadResult` and the partial file
//! - [`downloader`] - the `Downloader` and `DownloaderBuilder`
//! - [`error`] - centralized error handling with the `Error` enum
//! - [`filename`] - filename resolution and safety checks
//! - [`http`] - HTTP client setup and the HEAD probe
//! - [`progress`] - progress callbacks and the console renderer
//! - [`utils`] - size accounting and formatting

pub mod download;
pub mod downloader;
pub mod error;
pub mod filename;
pub mod http;
pub mod progress;
pub mod utils;

pub use download::{DownloadRequest, DownloadResult, PartialFile};
pub use downloader::{Downloader, DownloaderBuilder, DownloaderConfig};
pub use error::{Error, Result};
pub use filename::{is_valid_filename, resolve_filename, FilenameContext};
pub use http::{create_http_client, HttpClientConfig, ProbeInfo};
pub use progress::{ProgressCallback, ProgressSink};
pub use utils::{format_size, SizeDisplay};
