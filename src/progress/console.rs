//! Single-line console progress renderer.
//!
//! The line is rewritten in place after every chunk:
//!
//! `Downloading 4 MB/10 MB (40.0%) @ 2.5 MB/s`
//!
//! or, when the total size is unknown:
//!
//! `Downloading 4 MB/?? @ 2.5 MB/s`

use crate::utils::format_size;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{msg}";

/// Renders download progress on one rewritten stdout line.
#[derive(Debug)]
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Creates a renderer drawing to stdout.
    ///
    /// indicatif hides this target when stdout is not a terminal.
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stdout())
    }

    /// Creates a renderer drawing to `target`.
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style);
        }
        Self { bar }
    }

    /// Redraws the line.
    pub fn update(&self, written: u64, total: Option<u64>, elapsed: Duration) {
        self.bar.set_position(written);
        self.bar.set_message(status_line(written, total, elapsed));
    }

    /// Leaves the last line on screen and moves to the next one.
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Leaves the last line on screen after a failure.
    pub fn abandon(&self) {
        self.bar.abandon();
    }

    /// Message currently shown.
    pub fn message(&self) -> String {
        self.bar.message()
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Bytes per second, zero when no time has elapsed.
pub fn throughput(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        bytes as f64 / secs
    } else {
        0.0
    }
}

/// Builds the status line shown by [`ConsoleProgress`].
pub fn status_line(written: u64, total: Option<u64>, elapsed: Duration) -> String {
    let rate = format_size(throughput(written, elapsed) as u64);
    let written_str = format_size(written);

    match total {
        Some(total) if total > 0 => format!(
            "Downloading {}/{} ({:.1}%) @ {}/s",
            written_str,
            format_size(total),
            written as f64 * 100.0 / total as f64,
            rate
        ),
        _ => format!("Downloading {}/?? @ {}/s", written_str, rate),
    }
}
