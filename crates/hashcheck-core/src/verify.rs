//! The full check: validate, select algorithm, digest, report, compare.
//!
//! Each stage can end the run with a
//! [`HashCheckError`](crate::error::HashCheckError). Nothing is written to
//! `out` until the digest has been computed, so a failed run never prints a
//! partial report.

use std::io::{self, Read, Write};
use std::path::Path;

use crate::algorithm::resolve_algorithm;
use crate::checksum::{digest_path_with, open_shared};
use crate::compare::{compare, ComparisonOutcome};
use crate::config::HashCheckConfig;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::report::{report, report_outcome};
use crate::validate::validate_file_path;

/// Run the check against the real filesystem. The file is held under a shared
/// lock while it is hashed.
pub fn verify<W: Write>(
    invocation: &Invocation,
    cfg: &HashCheckConfig,
    out: &mut W,
) -> Result<ComparisonOutcome> {
    verify_with(invocation, cfg.buffer_size(), open_shared, out)
}

/// Like [`verify`], with the chunk size and file-open step supplied by the caller.
pub fn verify_with<W, R, F>(
    invocation: &Invocation,
    buf_size: usize,
    open: F,
    out: &mut W,
) -> Result<ComparisonOutcome>
where
    W: Write,
    R: Read,
    F: FnOnce(&Path) -> io::Result<R>,
{
    tracing::debug!("invocation: {:?}", invocation);

    let path = validate_file_path(&invocation.file_path)?;
    let algorithm = resolve_algorithm(&invocation.algorithm_name)?;
    let digest = digest_path_with(&path, algorithm, buf_size, open)?;

    let expected = invocation.expected_digest.as_deref();
    if let Err(e) = report(
        out,
        &invocation.file_path,
        algorithm.as_str(),
        &digest.hex,
        expected,
    ) {
        tracing::warn!("failed to write report: {}", e);
    }

    let outcome = compare(expected, &digest.hex);
    if let Err(e) = report_outcome(out, outcome) {
        tracing::warn!("failed to write result: {}", e);
    }
    tracing::info!(
        "{} {} {}: {:?}",
        algorithm,
        path.display(),
        digest.hex,
        outcome
    );
    Ok(outcome)
}
