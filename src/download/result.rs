//! Download results.

use crate::progress::throughput;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of a completed download.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadResult {
    /// Absolute path of the completed file.
    path: PathBuf,
    /// Bytes written by this call.
    size: u64,
    /// Wall time of this call.
    elapsed: Duration,
}

impl DownloadResult {
    /// Create a new [`DownloadResult`].
    pub fn new(path: PathBuf, size: u64, elapsed: Duration) -> Self {
        Self {
            path,
            size,
            elapsed,
        }
    }

    /// Get the completed file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written by this call.
    ///
    /// For a resumed download this excludes the bytes that were already on
    /// disk, so it can be smaller than the file.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the elapsed wall time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Average bytes per second, `0.0` when no time elapsed.
    pub fn average_throughput(&self) -> f64 {
        throughput(self.size, self.elapsed)
    }

    /// Consumes the result, returning the path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
