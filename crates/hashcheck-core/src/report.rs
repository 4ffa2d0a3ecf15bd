//! Human-readable report written to stdout.

use std::io::{self, Write};

use crate::compare::ComparisonOutcome;

/// Write the file / algorithm / digest block, plus the expected value as the
/// caller gave it (not normalized) when there is one.
pub fn report<W: Write>(
    out: &mut W,
    file_path: &str,
    algorithm: &str,
    digest_hex: &str,
    expected: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "File:      {file_path}")?;
    writeln!(out, "Algorithm: {algorithm}")?;
    writeln!(out, "Actual:    {digest_hex}")?;
    if let Some(expected) = expected {
        writeln!(out, "Expected:  {expected}")?;
    }
    Ok(())
}

/// Blank line followed by the outcome message.
pub fn report_outcome<W: Write>(out: &mut W, outcome: ComparisonOutcome) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", outcome.message())?;
    out.flush()
}
