//! Compare a computed digest with the one the user expects.

/// Result of comparing the computed digest with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    NoExpectedProvided,
    Match,
    Mismatch,
}

impl ComparisonOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            ComparisonOutcome::NoExpectedProvided | ComparisonOutcome::Match => 0,
            ComparisonOutcome::Mismatch => 1,
        }
    }

    /// Line printed at the end of the report.
    pub fn message(&self) -> &'static str {
        match self {
            ComparisonOutcome::NoExpectedProvided => {
                "No expected hash provided; nothing to compare."
            }
            ComparisonOutcome::Match => "OK: hash matches.",
            ComparisonOutcome::Mismatch => "FAILED: hash does NOT match.",
        }
    }
}

/// Strip all whitespace and lowercase, so pasted digests compare equal
/// regardless of case or surrounding spaces and line breaks.
pub fn normalize(digest: &str) -> String {
    digest
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare `actual` against `expected`. Both sides are normalized; the length
/// of `expected` is not checked against the algorithm.
pub fn compare(expected: Option<&str>, actual: &str) -> ComparisonOutcome {
    match expected {
        None | Some("") => ComparisonOutcome::NoExpectedProvided,
        Some(expected) if normalize(expected) == normalize(actual) => ComparisonOutcome::Match,
        Some(_) => ComparisonOutcome::Mismatch,
    }
}
