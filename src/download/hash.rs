//! SHA-256 helpers.
//!
//! Used twice: to derive deterministic fallback filenames from a URL, and to
//! verify a completed partial file against a digest supplied by the caller
//! before it is promoted to its target.
//!
//! # Examples
//!
//! ```rust
//! use resumedl::download::hash::{is_sha256_hex, url_digest};
//!
//! let digest = url_digest("https://example.com/");
//! assert_eq!(digest.len(), 64);
//! assert!(is_sha256_hex(&digest));
//! ```

use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};

const READ_BUFFER: usize = 64 * 1024;

/// Lowercase hex SHA-256 of a URL string.
pub fn url_digest(url: &str) -> String {
    format!("{:x}", Sha256::digest(url.as_bytes()))
}

/// Returns `true` for a 64 character hexadecimal string.
pub fn is_sha256_hex(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Lowercase hex SHA-256 of a file's content.
pub async fn file_sha256(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; READ_BUFFER];

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compares a file's SHA-256 with `expected` (case-insensitive).
///
/// Returns the actual digest alongside the verdict so callers can report it.
pub async fn verify_sha256(path: &Path, expected: &str) -> std::io::Result<(bool, String)> {
    let actual = file_sha256(path).await?;
    Ok((actual.eq_ignore_ascii_case(expected.trim()), actual))
}
