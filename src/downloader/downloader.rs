//! Core downloader implementation with fetch logic.
//!
//! A call to [`Downloader::download`] goes through these steps:
//!
//! 1. HEAD probe (failures are ignored)
//! 2. target resolution, naming the file when the destination is a directory
//! 3. resume decision from the probe and the existing partial file
//! 4. GET, optionally with `Range: bytes=<offset>-`
//! 5. streaming into the partial file with progress reporting
//! 6. optional SHA-256 verification, then rename over the target
//!
//! Only the final rename touches the target path.
//!
//! # Examples
//!
//! ```rust,no_run
//! use resumedl::downloader::DownloaderBuilder;
//! use resumedl::download::DownloadRequest;
//!
//! # async fn example() -> Result<(), resumedl::Error> {
//! let downloader = DownloaderBuilder::new().build()?;
//! let request = DownloadRequest::try_new("https://example.com/paper.jar", "versions")?
//!     .with_filename("paper-1.20.4.jar");
//!
//! let result = downloader.download(&request).await?;
//! println!(
//!     "{} bytes to {:?} in {:?}",
//!     result.size(),
//!     result.path(),
//!     result.elapsed()
//! );
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::download::hash::{is_sha256_hex, verify_sha256};
use crate::download::{DownloadRequest, DownloadResult, PartialFile};
use crate::error::{Error, Result};
use crate::filename::{resolve_filename, FilenameContext};
use crate::http::{create_http_client, probe::probe, ProbeInfo};
use crate::progress::ProgressReporter;
use crate::utils::{body_starts_at, response_total_size};

use futures::StreamExt;
use reqwest::{
    header::{HeaderMap, CONTENT_RANGE, RANGE},
    Response, StatusCode,
};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::{self, Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::{fs, fs::File, io::AsyncWriteExt};
use tracing::{debug, warn};

/// Largest piece written to disk between two progress updates.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Represents the download controller.
///
/// The downloader owns one HTTP client and its connection pool. Cloning it
/// is cheap and clones share the pool, so independent files can be fetched
/// from separate tasks. Two calls must never target the same file at the
/// same time: they would write to the same partial file.
///
/// ```rust
/// # fn main() -> Result<(), resumedl::Error> {
/// use resumedl::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
    client: ClientWithMiddleware,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub fn new(config: DownloaderConfig) -> Result<Self> {
        let client = create_http_client(config.http_config())?;
        Ok(Self { config, client })
    }

    /// Gets the headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.config.headers
    }

    /// Gets the connect and read timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets the number of transport retries.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Sends the GET, asking for the bytes from `offset` on when given.
    async fn get(&self, request: &DownloadRequest, offset: Option<u64>) -> Result<Response> {
        let mut req = self.client.get(request.url.clone());
        if let Some(offset) = offset {
            req = req.header(RANGE, format!("bytes={}-", offset));
        }
        Ok(req.send().await?)
    }

    /// Downloads `request.url` and returns once the target file is complete.
    ///
    /// On failure the target is left as it was. Bytes already received stay
    /// in the partial file, so calling again with `resume` enabled continues
    /// where this call stopped, provided the server supports ranges.
    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadResult> {
        if let Some(expected) = request.sha256.as_deref() {
            if !is_sha256_hex(expected.trim()) {
                return Err(Error::Internal(format!(
                    "\"{}\" is not a hex SHA-256 digest",
                    expected
                )));
            }
        }

        debug!("Probing {}", request.url);
        let probe = probe(&self.client, &request.url).await;

        let target = resolve_target(request, probe.as_ref()).await?;
        let partial = PartialFile::for_target(&target);
        let started = Instant::now();

        let accepts_ranges = probe.as_ref().is_some_and(|p| p.accepts_ranges);
        let mut offset = if request.resume && accepts_ranges {
            partial.existing_len().await?
        } else {
            None
        };

        if let (Some(existing), Some(length)) =
            (offset, probe.as_ref().and_then(|p| p.content_length))
        {
            // Nothing left to fetch: the previous call died between the last
            // byte and the rename.
            if existing == length {
                debug!("{:?} already holds all {} bytes", partial.path(), length);
                finalize(request, &partial).await?;
                return Ok(DownloadResult::new(target, 0, started.elapsed()));
            }
            if existing > length {
                debug!(
                    "{:?} holds {} bytes but the resource has {}, restarting from zero",
                    partial.path(),
                    existing,
                    length
                );
                offset = None;
            }
        }

        debug!("Fetching {}", request.url);
        if let Some(offset) = offset {
            debug!("Resuming {:?} from byte {}", partial.path(), offset);
        }
        let mut res = self.get(request, offset).await?;

        if let Some(requested) = offset {
            if res.status() == StatusCode::OK {
                // A 200 to a range request means the server sent the whole body.
                debug!("Server ignored the range request, restarting from zero");
                offset = None;
            } else if res.status() == StatusCode::PARTIAL_CONTENT
                && !body_starts_at(&res, requested)
            {
                warn!(
                    "{} answered a range from byte {} with {:?}, restarting from zero",
                    request.url,
                    requested,
                    res.headers().get(CONTENT_RANGE)
                );
                drop(res);
                offset = None;
                res = self.get(request, None).await?;
            }
        }

        let status = res.status();
        if status != StatusCode::OK && status != StatusCode::PARTIAL_CONTENT {
            warn!("{} answered {}", request.url, status);
            return Err(Error::Transfer {
                status,
                url: request.url.to_string(),
            });
        }
        if !body_starts_at(&res, offset.unwrap_or(0)) {
            warn!(
                "{} sent a body not starting at byte {}",
                request.url,
                offset.unwrap_or(0)
            );
            return Err(Error::Transfer {
                status,
                url: request.url.to_string(),
            });
        }

        let total = response_total_size(&res, offset.unwrap_or(0));

        let mut file = partial.open(offset.is_some()).await?;
        let reporter = request.progress.start();

        let outcome = async {
            let written = stream_to_file(res, &mut file, &reporter, total, started).await?;
            drop(file);
            finalize(request, &partial).await?;
            Ok::<_, Error>(written)
        }
        .await;

        let written = match outcome {
            Ok(written) => {
                reporter.finish();
                written
            }
            Err(e) => {
                reporter.abandon();
                warn!("Download of {} failed: {}", request.url, e);
                return Err(e);
            }
        };

        let result = DownloadResult::new(target, written, started.elapsed());
        debug!(
            "Downloaded {} bytes to {:?} in {:?}",
            result.size(),
            result.path(),
            result.elapsed()
        );
        Ok(result)
    }
}

/// Works out the absolute path of the file to produce.
async fn resolve_target(request: &DownloadRequest, probe: Option<&ProbeInfo>) -> Result<PathBuf> {
    let destination = if request.destination.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        request.destination.clone()
    };

    let is_dir = match fs::metadata(&destination).await {
        Ok(meta) => meta.is_dir(),
        Err(_) if ends_with_separator(&destination) => {
            debug!("Creating destination directory {:?}", destination);
            fs::create_dir_all(&destination).await?;
            true
        }
        Err(_) => false,
    };

    let target = if is_dir {
        let name = resolve_filename(&FilenameContext {
            url: &request.url,
            requested: request.filename.as_deref(),
            probe,
        });
        destination.join(name)
    } else {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating destination directory {:?}", parent);
            fs::create_dir_all(parent).await?;
        }
        destination
    };

    Ok(path::absolute(target)?)
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(|c: char| path::is_separator(c))
}

/// Writes the response body to `file`, returning the bytes written.
async fn stream_to_file(
    res: Response,
    file: &mut File,
    reporter: &ProgressReporter<'_>,
    total: Option<u64>,
    started: Instant,
) -> Result<u64> {
    let mut written: u64 = 0;

    debug!("Retrieving chunks...");
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = match item {
            Ok(chunk) => chunk,
            Err(e) => {
                // Keep what was received for the next attempt.
                file.flush().await?;
                return Err(e.into());
            }
        };

        for piece in chunk.chunks(CHUNK_SIZE) {
            file.write_all(piece).await?;
            written += piece.len() as u64;
            reporter.update(written, total, started.elapsed());
        }
    }

    file.flush().await?;
    Ok(written)
}

/// Verifies the partial file if a digest was given, then promotes it.
async fn finalize(request: &DownloadRequest, partial: &PartialFile) -> Result<()> {
    if let Some(expected) = request.sha256.as_deref() {
        let (matches, actual) = verify_sha256(partial.path(), expected).await?;
        if !matches {
            partial.discard().await?;
            return Err(Error::ChecksumMismatch {
                expected: expected.to_string(),
                actual,
            });
        }
    }

    partial.promote().await?;
    Ok(())
}
