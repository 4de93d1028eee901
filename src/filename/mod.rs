//! Deterministic, safe filename derivation.
//!
//! A download aimed at a directory needs a name. It is taken from the first
//! of these signals that yields a filesystem-safe candidate:
//!
//! 1. the name the caller asked for
//! 2. the `Content-Disposition` header (`filename*` before `filename`)
//! 3. the last segment of the URL path
//! 4. the `file` query parameter
//! 5. `file_<digest>.<ext>` built from the URL and `Content-Type`
//!
//! # Examples
//!
//! ```rust
//! use reqwest::Url;
//! use resumedl::filename::{resolve_filename, FilenameContext};
//!
//! let url = Url::parse("https://example.com/builds/paper-1.20.4.jar")?;
//! let name = resolve_filename(&FilenameContext {
//!     url: &url,
//!     requested: None,
//!     probe: None,
//! });
//! assert_eq!(name, "paper-1.20.4.jar");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod content_disposition;
pub mod mime;
pub mod resolver;
pub mod safety;

pub use content_disposition::parse_content_disposition;
pub use mime::extension_from_content_type;
pub use resolver::{fallback_filename, resolve_filename, FilenameContext, Resolver, RESOLVERS};
pub use safety::{is_valid_filename, sanitize_filename};
