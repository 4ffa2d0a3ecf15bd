//! Streaming digest of a file or any reader.
//!
//! Reads in fixed-size chunks to keep memory use bounded; suitable for large
//! files. The result does not depend on the chunk size.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use fs2::FileExt;

use crate::algorithm::HashAlgorithm;
use crate::error::{HashCheckError, Result};

/// Default read chunk size.
pub const BUF_SIZE: usize = 64 * 1024;

/// Final digest of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestResult {
    pub algorithm: HashAlgorithm,
    /// Lowercase hex.
    pub hex: String,
}

impl DigestResult {
    fn from_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> Self {
        let hex = hex::encode(bytes);
        debug_assert_eq!(
            hex.len(),
            algorithm.hex_len(),
            "{algorithm} produced a digest of unexpected length"
        );
        Self { algorithm, hex }
    }
}

/// Digest an in-memory slice in one pass.
pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> DigestResult {
    let mut hasher = algorithm.hasher();
    hasher.update(data);
    DigestResult::from_bytes(algorithm, &hasher.finalize())
}

/// Stream `reader` through `algorithm` using chunks of at most `buf_size` bytes.
///
/// Returns the digest and the number of bytes consumed. `Interrupted` reads are
/// retried; any other read error aborts without producing a digest.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: HashAlgorithm,
    buf_size: usize,
) -> io::Result<(DigestResult, u64)> {
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0u8; buf_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((DigestResult::from_bytes(algorithm, &hasher.finalize()), total))
}

/// Open `path` for reading and take a shared advisory lock on it.
///
/// Cooperating writers that ask for an exclusive lock wait until the handle is
/// dropped, which releases the lock. Blocks while another process holds an
/// exclusive lock.
pub fn open_shared(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    FileExt::lock_shared(&file)?;
    Ok(file)
}

/// Compute the digest of the file at `path` with the default chunk size.
pub fn digest_path(path: &Path, algorithm: HashAlgorithm) -> Result<DigestResult> {
    digest_path_with(path, algorithm, BUF_SIZE, open_shared)
}

/// Like [`digest_path`], with an explicit chunk size and open step.
///
/// A failure to open maps to [`HashCheckError::NotFound`]; a failure while
/// reading maps to [`HashCheckError::DigestIo`]. The handle returned by `open`
/// is dropped before this returns on every path.
pub fn digest_path_with<R, F>(
    path: &Path,
    algorithm: HashAlgorithm,
    buf_size: usize,
    open: F,
) -> Result<DigestResult>
where
    R: Read,
    F: FnOnce(&Path) -> io::Result<R>,
{
    let file = open(path).map_err(|e| {
        tracing::debug!("open {} failed: {}", path.display(), e);
        HashCheckError::NotFound {
            path: path.to_path_buf(),
        }
    })?;
    let (digest, bytes) =
        digest_reader(file, algorithm, buf_size).map_err(|source| HashCheckError::DigestIo {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        "{} digest of {} ({} bytes): {}",
        algorithm,
        path.display(),
        bytes,
        digest.hex
    );
    Ok(digest)
}
