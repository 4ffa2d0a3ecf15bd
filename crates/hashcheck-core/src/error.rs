//! Error taxonomy for a single verification run.
//!
//! Every variant is fatal and maps to a fixed process exit status; there is no
//! retry or recovery path.

use std::io;
use std::path::PathBuf;

use crate::algorithm::HashAlgorithm;

/// Exit status for usage errors (missing argument, missing file, bad algorithm).
pub const EXIT_USAGE: i32 = 2;
/// Exit status for I/O failures while reading the file being hashed.
pub const EXIT_IO: i32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum HashCheckError {
    /// A required argument was missing or the command line was malformed.
    #[error("{0}")]
    Usage(String),

    /// Target is missing, not a regular file, or could not be opened.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error(
        "unsupported algorithm: {name} (supported: {})",
        HashAlgorithm::supported_names()
    )]
    UnsupportedAlgorithm { name: String },

    /// Read failed partway through the digest.
    #[error("error reading {}: {source}", .path.display())]
    DigestIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HashCheckError {
    pub fn missing_file_path() -> Self {
        HashCheckError::Usage("missing file path".to_string())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HashCheckError::Usage(_)
            | HashCheckError::NotFound { .. }
            | HashCheckError::UnsupportedAlgorithm { .. } => EXIT_USAGE,
            HashCheckError::DigestIo { .. } => EXIT_IO,
        }
    }

    /// True for errors caused by how the tool was invoked; the CLI prints usage after these.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            HashCheckError::Usage(_) | HashCheckError::UnsupportedAlgorithm { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HashCheckError>;
