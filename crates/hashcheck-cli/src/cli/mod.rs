//! Positional command line for hashcheck and the stdout/stderr/exit-code glue.

use clap::Parser;
use hashcheck_core::config::HashCheckConfig;
use hashcheck_core::verify::verify;
use hashcheck_core::Invocation;
use std::io::{self, Write};

pub const USAGE: &str = "Usage: hashcheck <file> [algorithm] [expected_hash]";

/// Compute a file's digest and optionally compare it with an expected one.
#[derive(Debug, Parser)]
#[command(name = "hashcheck", version)]
#[command(
    about = "Compute a file's digest and optionally verify it against an expected hash",
    long_about = None
)]
pub struct Cli {
    /// Path to the file to hash. May start with `-`.
    #[arg(allow_hyphen_values = true)]
    pub file: Option<String>,

    /// Digest algorithm: sha256 (default), sha1, sha384, sha512 or md5.
    #[arg(allow_hyphen_values = true)]
    pub algorithm: Option<String>,

    /// Expected digest in hex. Case and whitespace are ignored.
    #[arg(allow_hyphen_values = true)]
    pub expected_hash: Option<String>,
}

impl Cli {
    pub fn into_invocation(self) -> Invocation {
        Invocation::resolve(self.file, self.algorithm, self.expected_hash)
    }
}

/// Run the check, printing the report to stdout and errors to stderr.
/// Returns the process exit status.
pub fn run(cli: Cli, cfg: &HashCheckConfig) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(cli, cfg, &mut stdout.lock(), &mut stderr.lock())
}

pub fn run_with<O: Write, E: Write>(
    cli: Cli,
    cfg: &HashCheckConfig,
    out: &mut O,
    err: &mut E,
) -> i32 {
    let invocation = cli.into_invocation();
    match verify(&invocation, cfg, out) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::debug!("check failed: {:?}", e);
            // Nothing useful to do if stderr itself is gone.
            let _ = writeln!(err, "hashcheck error: {e}");
            if e.is_usage() {
                let _ = writeln!(err, "{USAGE}");
            }
            e.exit_code()
        }
    }
}
