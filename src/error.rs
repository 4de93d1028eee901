//! Error handling for resumedl.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`Error`] enum below. Failures of the HEAD probe never show up here:
//! the downloader swallows them and continues without metadata.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen while downloading a file.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The URL cannot be parsed or cannot be downloaded from.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The GET request answered with neither `200 OK` nor `206 Partial Content`.
    ///
    /// The partial file, if any, is left untouched.
    #[error("Transfer error: {url} answered with HTTP {status}")]
    Transfer {
        /// Status code returned by the server.
        status: StatusCode,
        /// URL that was requested.
        url: String,
    },

    /// The completed file does not match the expected SHA-256 digest.
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// I/O Error.
    ///
    /// Raised while creating directories, writing the partial file or
    /// promoting it to the target. The partial file is kept for a later resume.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised while sending a request through the middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Returns the HTTP status carried by a [`Error::Transfer`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Transfer { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for operations that can fail with a resumedl error.
pub type Result<T> = std::result::Result<T, Error>;
