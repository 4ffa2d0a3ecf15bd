//! One run's inputs, with positional defaults applied.

use crate::algorithm::DEFAULT_ALGORITHM;

/// What the user asked for: which file, which algorithm, and optionally the
/// digest it should have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Empty when no path was given; the validator rejects that.
    pub file_path: String,
    pub algorithm_name: String,
    /// `None` when omitted or given as an empty string.
    pub expected_digest: Option<String>,
}

impl Invocation {
    /// Build from the three optional positionals (`<file> [algorithm] [expected_hash]`).
    pub fn resolve(
        file: Option<String>,
        algorithm: Option<String>,
        expected: Option<String>,
    ) -> Self {
        Self {
            file_path: file.unwrap_or_default(),
            algorithm_name: algorithm.unwrap_or_else(|| DEFAULT_ALGORITHM.to_string()),
            expected_digest: expected.filter(|e| !e.is_empty()),
        }
    }

    /// Build from raw positional arguments, program name excluded.
    /// Extra arguments past the third are ignored; the CLI parser rejects them.
    pub fn from_positional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut it = args.into_iter().map(Into::into);
        let file = it.next();
        let algorithm = it.next();
        let expected = it.next();
        Self::resolve(file, algorithm, expected)
    }
}
