//! Download module containing the request and result records.
//!
//! - [`request`] - what to fetch and where ([`DownloadRequest`])
//! - [`result`] - what a completed call reports ([`DownloadResult`])
//! - [`partial`] - the `.tmp` file a transfer is written to ([`PartialFile`])
//! - [`hash`] - SHA-256 helpers for naming and verification
//!
//! # Examples
//!
//! ```rust
//! use resumedl::download::{DownloadRequest, PartialFile};
//! use std::path::Path;
//!
//! let request = DownloadRequest::try_new("https://example.com/server.jar", "versions")?;
//! assert!(request.resume);
//!
//! let partial = PartialFile::for_target(Path::new("versions/server.jar"));
//! assert_eq!(partial.path(), Path::new("versions/server.jar.tmp"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod hash;
pub mod partial;
pub mod request;
pub mod result;

pub use partial::PartialFile;
pub use request::DownloadRequest;
pub use result::DownloadResult;
