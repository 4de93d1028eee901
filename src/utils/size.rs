//! Human-readable byte sizes.

use std::fmt;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const OVERFLOW_UNIT: &str = "PB";
const FACTOR: f64 = 1024.0;

/// A byte count scaled to the first unit below 1024.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDisplay {
    /// Scaled value, rounded to one decimal place.
    pub value: f64,
    /// Unit symbol, from `B` up to `PB`.
    pub unit: &'static str,
    whole: bool,
}

impl SizeDisplay {
    /// Scales `bytes` by powers of 1024.
    pub fn new(bytes: u64) -> Self {
        let mut size = bytes as f64;
        for unit in UNITS {
            if size < FACTOR {
                return Self::scaled(size, unit);
            }
            size /= FACTOR;
        }

        Self::scaled(size, OVERFLOW_UNIT)
    }

    fn scaled(size: f64, unit: &'static str) -> Self {
        let whole = size.fract() == 0.0;
        Self {
            value: if whole { size } else { round_tenth(size) },
            unit,
            whole,
        }
    }
}

impl fmt::Display for SizeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole {
            write!(f, "{} {}", self.value as u64, self.unit)
        } else {
            write!(f, "{:.1} {}", self.value, self.unit)
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a byte count, e.g. `1536` as `"1.5 KB"`.
///
/// ```rust
/// use resumedl::utils::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1024), "1 KB");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    SizeDisplay::new(bytes).to_string()
}
