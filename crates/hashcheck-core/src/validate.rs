//! Input validation before any hashing happens.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HashCheckError, Result};

/// Check that `path` is non-empty and names an existing regular file.
///
/// Only metadata is inspected; the file is not opened here. Symlinks are
/// followed.
pub fn validate_file_path(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return Err(HashCheckError::missing_file_path());
    }
    let p = Path::new(path);
    match fs::metadata(p) {
        Ok(meta) if meta.is_file() => Ok(p.to_path_buf()),
        Ok(_) => Err(HashCheckError::NotFound {
            path: p.to_path_buf(),
        }),
        Err(e) => {
            tracing::debug!("stat {} failed: {}", p.display(), e);
            Err(HashCheckError::NotFound {
                path: p.to_path_buf(),
            })
        }
    }
}
