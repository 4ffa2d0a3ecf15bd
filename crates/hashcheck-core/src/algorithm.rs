//! Supported digest algorithms.

use std::fmt;
use std::str::FromStr;

use digest::Digest;

use crate::error::HashCheckError;

/// Algorithm used when none is given on the command line.
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// Closed set of digest algorithms the tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha1,
    Sha384,
    Sha512,
    Md5,
}

impl HashAlgorithm {
    /// All supported algorithms, in the order they are listed to users.
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Md5,
    ];

    /// Canonical (command-line) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Md5 => "md5",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
            HashAlgorithm::Md5 => 16,
        }
    }

    /// Length of the lowercase hex rendering of a digest.
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Comma-separated list of supported names, for error messages.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Fresh incremental hasher for this algorithm.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            HashAlgorithm::Sha256 => Box::new(DigestHasher(sha2::Sha256::new())),
            HashAlgorithm::Sha1 => Box::new(DigestHasher(sha1::Sha1::new())),
            HashAlgorithm::Sha384 => Box::new(DigestHasher(sha2::Sha384::new())),
            HashAlgorithm::Sha512 => Box::new(DigestHasher(sha2::Sha512::new())),
            HashAlgorithm::Md5 => Box::new(DigestHasher(md5::Md5::new())),
        }
    }
}

/// Resolve a command-line algorithm name. Matching is exact and case-sensitive.
pub fn resolve_algorithm(name: &str) -> Result<HashAlgorithm, HashCheckError> {
    name.parse()
}

impl FromStr for HashAlgorithm {
    type Err = HashCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| HashCheckError::UnsupportedAlgorithm {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal incremental hashing interface over the concrete digest types.
pub trait Hasher {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

struct DigestHasher<D>(D);

impl<D: Digest> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        let DigestHasher(inner) = *self;
        inner.finalize().to_vec()
    }
}
