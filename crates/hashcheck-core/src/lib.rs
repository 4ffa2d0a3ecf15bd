//! Compute a file's digest and check it against an expected value.
//!
//! The pipeline is strictly sequential: [`invocation`] resolves the
//! positional inputs, [`validate`] checks the path, [`algorithm`] selects the
//! digest, [`checksum`] streams the file, [`report`] prints the block and
//! [`compare`] decides the outcome. [`verify`] runs them in order.

pub mod config;
pub mod logging;

pub mod algorithm;
pub mod checksum;
pub mod compare;
pub mod error;
pub mod invocation;
pub mod report;
pub mod validate;
pub mod verify;

pub use algorithm::HashAlgorithm;
pub use compare::ComparisonOutcome;
pub use error::HashCheckError;
pub use invocation::Invocation;
