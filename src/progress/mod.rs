//! Progress reporting.
//!
//! A download reports its progress to exactly one [`ProgressSink`]:
//!
//! - [`ProgressSink::Callback`] - a caller function receiving
//!   `(written, total)` after every chunk
//! - [`ProgressSink::Console`] - a single rewritten stdout line, see
//!   [`ConsoleProgress`]
//! - [`ProgressSink::Hidden`] - nothing
//!
//! `written` counts the bytes received by the current call only, so a
//! resumed download starts again from zero while `total` includes the bytes
//! already on disk.
//!
//! # Examples
//!
//! ```rust
//! use resumedl::progress::ProgressSink;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//!
//! let seen = Arc::new(AtomicU64::new(0));
//! let seen_clone = seen.clone();
//! let sink = ProgressSink::callback(move |written, _total| {
//!     seen_clone.store(written, Ordering::SeqCst);
//! });
//! ```

pub mod console;

pub use console::{status_line, throughput, ConsoleProgress};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback invoked with `(written, total)` after each chunk.
pub type ProgressCallback = Arc<dyn Fn(u64, Option<u64>) + Send + Sync>;

/// Where a download reports its progress.
#[derive(Clone, Default)]
pub enum ProgressSink {
    /// No progress output.
    Hidden,
    /// One rewritten status line on stdout.
    ///
    /// Nothing is printed when stdout is not a terminal (piped or
    /// redirected output), not even the final line. Use
    /// [`ProgressSink::Callback`] to log progress in that case.
    #[default]
    Console,
    /// A caller-provided callback.
    Callback(ProgressCallback),
}

impl fmt::Debug for ProgressSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressSink::Hidden => f.write_str("Hidden"),
            ProgressSink::Console => f.write_str("Console"),
            ProgressSink::Callback(_) => f.write_str("Callback"),
        }
    }
}

impl ProgressSink {
    /// Wraps a closure into a [`ProgressSink::Callback`].
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(u64, Option<u64>) + Send + Sync + 'static,
    {
        ProgressSink::Callback(Arc::new(callback))
    }

    /// Starts reporting for one transfer.
    pub(crate) fn start(&self) -> ProgressReporter<'_> {
        match self {
            ProgressSink::Hidden => ProgressReporter::Hidden,
            ProgressSink::Console => ProgressReporter::Console(ConsoleProgress::new()),
            ProgressSink::Callback(callback) => ProgressReporter::Callback(callback),
        }
    }
}

/// Live state of a [`ProgressSink`] during one transfer.
pub(crate) enum ProgressReporter<'a> {
    Hidden,
    Console(ConsoleProgress),
    Callback(&'a ProgressCallback),
}

impl ProgressReporter<'_> {
    pub(crate) fn update(&self, written: u64, total: Option<u64>, elapsed: Duration) {
        match self {
            ProgressReporter::Hidden => {}
            ProgressReporter::Console(console) => console.update(written, total, elapsed),
            ProgressReporter::Callback(callback) => callback(written, total),
        }
    }

    pub(crate) fn finish(&self) {
        if let ProgressReporter::Console(console) = self {
            console.finish();
        }
    }

    pub(crate) fn abandon(&self) {
        if let ProgressReporter::Console(console) = self {
            console.abandon();
        }
    }
}
