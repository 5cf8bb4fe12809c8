#![deny(unsafe_code)]

//! Folder relocation.
//!
//! One call per matched folder. A failure is reported to the caller and
//! never aborts the run; the pipeline records it against that folder and
//! continues. Relocation is not assumed to be atomic: when a plain rename
//! fails (typically a cross-device move), the folder is copied recursively
//! and the source removed afterwards.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors from relocating a single folder.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("failed to copy {path}: {source}")]
    Copy {
        path: std::path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove source {path} after copy: {source}")]
    RemoveSource {
        path: std::path::PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for relocation operations.
pub type Result<T> = std::result::Result<T, RelocateError>;

/// Move `source` to `destination`.
///
/// Tries a rename first; on failure falls back to copy-then-remove so that
/// moves across filesystems still succeed. If the fallback copy fails, the
/// partially written destination is removed on a best-effort basis and the
/// source is left untouched.
pub fn relocate_folder(source: &Path, destination: &Path) -> Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => {
            debug!(source = %source.display(), destination = %destination.display(), "renamed");
            return Ok(());
        }
        Err(error) => {
            debug!(
                source = %source.display(),
                %error,
                "rename failed, falling back to copy"
            );
        }
    }

    if let Err(error) = copy_dir_recursive(source, destination) {
        if let Err(cleanup) = fs::remove_dir_all(destination) {
            warn!(
                destination = %destination.display(),
                %cleanup,
                "could not clean up partial destination"
            );
        }
        return Err(error);
    }
    fs::remove_dir_all(source).map_err(|source_err| RelocateError::RemoveSource {
        path: source.to_path_buf(),
        source: source_err,
    })
}

fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<()> {
    let copy_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| RelocateError::Copy { path, source }
    };

    fs::create_dir_all(destination).map_err(copy_err(destination))?;
    for entry in fs::read_dir(source).map_err(copy_err(source))? {
        let entry = entry.map_err(copy_err(source))?;
        let target = destination.join(entry.file_name());
        let file_type = entry.file_type().map_err(copy_err(&entry.path()))?;
        if file_type.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(copy_err(&entry.path()))?;
        }
    }
    Ok(())
}
