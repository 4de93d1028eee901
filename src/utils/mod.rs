//! Shared utility functions.
//!
//! - [`content_length`] - expected total size of a GET response
//! - [`size`] - human-readable byte sizes used by the console progress line
//!
//! # Examples
//!
//! ```rust
//! use resumedl::utils::{format_size, SizeDisplay};
//!
//! assert_eq!(format_size(1_048_576), "1 MB");
//!
//! let size = SizeDisplay::new(1536);
//! assert_eq!((size.value, size.unit), (1.5, "KB"));
//! ```

pub mod content_length;
pub mod size;

pub use content_length::{body_starts_at, content_range_start, response_total_size, total_size};
pub use size::{format_size, SizeDisplay};
