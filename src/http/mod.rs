//! HTTP module containing HTTP client functionality.
//!
//! - [`client`] - client creation, default headers and middleware
//! - [`probe`] - the HEAD probe that learns resumability and naming hints
//!
//! # Examples
//!
//! ```rust
//! use resumedl::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Duration::from_secs(5),
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod probe;

pub use client::{create_http_client, default_headers, HttpClientConfig};
pub use probe::ProbeInfo;
