//! Atomic document output.
//!
//! The document is written to a temporary file in the destination directory
//! and renamed over the target only once every byte is on disk. A failed run
//! therefore never leaves a truncated file behind, and an existing file at the
//! target path is only replaced on success.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

/// Errors that can occur while writing the output document
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Output location is not writable (missing directory, permissions, disk full)
    #[error("Failed to write output file {}", .path.display())]
    Io {
        /// Requested output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Finished temporary file could not be moved into place
    #[error("Failed to move finished output into place at {}", .path.display())]
    Persist {
        /// Requested output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Write `contents` to `path` atomically, returning the number of bytes written
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<u64, WriteError> {
    let path = path.as_ref();
    let io_error = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_error)?;
    debug!("Staging output in {}", temp_file.path().display());

    temp_file.write_all(contents).map_err(io_error)?;
    temp_file.as_file().sync_all().map_err(io_error)?;

    temp_file.persist(path).map_err(|e| WriteError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(contents.len() as u64)
}
