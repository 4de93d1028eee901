//! Downloader module containing core downloader functionality, builder pattern, and configuration.
//!
//! - `downloader` - the [`Downloader`] and its `download` operation
//! - `builder` - [`DownloaderBuilder`] for chained configuration
//! - `config` - [`DownloaderConfig`], the client-level settings
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use resumedl::downloader::DownloaderBuilder;
//! use resumedl::download::DownloadRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build()?;
//!
//! let request = DownloadRequest::try_new("https://example.com/server.jar", "versions")?;
//! let result = downloader.download(&request).await?;
//! println!("Saved to {:?}", result.path());
//! # Ok(())
//! # }
//! ```
//!
//! ## One task per file
//!
//! ```rust,no_run
//! use resumedl::downloader::DownloaderBuilder;
//! use resumedl::download::DownloadRequest;
//! use resumedl::progress::ProgressSink;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build()?;
//! let mut tasks = Vec::new();
//!
//! for url in ["https://example.com/a.jar", "https://example.com/b.jar"] {
//!     let downloader = downloader.clone();
//!     let request = DownloadRequest::try_new(url, "plugins")?.with_progress(ProgressSink::Hidden);
//!     tasks.push(tokio::spawn(async move { downloader.download(&request).await }));
//! }
//!
//! for task in tasks {
//!     task.await??;
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::DownloaderConfig;
pub use downloader::{Downloader, CHUNK_SIZE};
