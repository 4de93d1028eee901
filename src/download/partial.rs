//! The `.tmp` sibling a download is written to.
//!
//! Bytes are only ever written to the partial file. Its length is the resume
//! offset, and it becomes visible at the target path through a single rename
//! once the whole body has been received. The target therefore either does
//! not exist, holds its previous content, or holds the complete new file.
//!
//! Two downloads of the same target share the same partial file; nothing
//! here locks it.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tracing::debug;

/// Suffix appended to the target file name.
pub const TEMP_SUFFIX: &str = ".tmp";

/// The partial file belonging to a download target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialFile {
    target: PathBuf,
    path: PathBuf,
}

impl PartialFile {
    /// Returns the partial file for `target`: same directory, same name plus
    /// [`TEMP_SUFFIX`].
    pub fn for_target(target: &Path) -> Self {
        let mut name = target
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(TEMP_SUFFIX);

        Self {
            target: target.to_path_buf(),
            path: target.with_file_name(name),
        }
    }

    /// Path of the partial file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the partial file is promoted to.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Length of an existing partial file, `None` when there is none.
    pub async fn existing_len(&self) -> io::Result<Option<u64>> {
        match fs::metadata(&self.path).await {
            Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Opens the partial file, appending to it or truncating it.
    pub async fn open(&self, append: bool) -> io::Result<File> {
        debug!(
            "Opening partial file {:?} ({})",
            self.path,
            if append { "append" } else { "truncate" }
        );
        OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&self.path)
            .await
    }

    /// Renames the partial file over the target.
    pub async fn promote(&self) -> io::Result<()> {
        debug!("Promoting {:?} to {:?}", self.path, self.target);
        fs::rename(&self.path, &self.target).await
    }

    /// Deletes the partial file if it exists.
    pub async fn discard(&self) -> io::Result<()> {
        match fs::remove_file(&self.path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
