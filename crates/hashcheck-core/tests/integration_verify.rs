//! Integration test: full check against real files on disk.
//!
//! Writes files into a temp dir, runs the whole pipeline through
//! `verify::verify`, and asserts on the outcome and the printed report.

use std::fs;

use hashcheck_core::checksum::{digest_bytes, digest_path};
use hashcheck_core::config::HashCheckConfig;
use hashcheck_core::verify::verify;
use hashcheck_core::{ComparisonOutcome, HashAlgorithm, HashCheckError, Invocation};
use tempfile::tempdir;

fn check(
    args: &[&str],
    cfg: &HashCheckConfig,
) -> (Result<ComparisonOutcome, HashCheckError>, String) {
    let inv = Invocation::from_positional(args.iter().copied());
    let mut out = Vec::new();
    let res = verify(&inv, cfg, &mut out);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn empty_file_sha256_without_expected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();
    let path = path.to_str().unwrap();

    let (res, out) = check(&[path], &HashCheckConfig::default());
    let outcome = res.unwrap();
    assert_eq!(outcome, ComparisonOutcome::NoExpectedProvided);
    assert_eq!(outcome.exit_code(), 0);
    assert!(out.contains(
        "Actual:    e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n"
    ));
    assert!(out.contains("No expected hash provided"));
    assert!(!out.contains("Expected:"));
}

#[test]
fn abc_sha1_with_uppercase_expected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("abc.txt");
    fs::write(&path, b"abc").unwrap();

    let (res, out) = check(
        &[
            path.to_str().unwrap(),
            "sha1",
            "A9993E364706816ABA3E25717850C26C9CD0D89D",
        ],
        &HashCheckConfig::default(),
    );
    assert_eq!(res.unwrap(), ComparisonOutcome::Match);
    assert!(out.contains("Actual:    a9993e364706816aba3e25717850c26c9cd0d89d\n"));
    assert!(out.contains("Expected:  A9993E364706816ABA3E25717850C26C9CD0D89D\n"));
}

#[test]
fn every_algorithm_matches_its_own_digest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let body: Vec<u8> = (0u8..100).cycle().take(200 * 1024 + 3).collect();
    fs::write(&path, &body).unwrap();
    let p = path.to_str().unwrap();

    for algo in HashAlgorithm::ALL {
        let actual = digest_path(&path, algo).unwrap();
        assert_eq!(actual, digest_bytes(&body, algo));
        assert_eq!(actual.hex.len(), algo.hex_len());

        let spaced = format!("  {}\n", actual.hex.to_uppercase());
        let (res, _) = check(&[p, algo.as_str(), &spaced], &HashCheckConfig::default());
        assert_eq!(res.unwrap(), ComparisonOutcome::Match, "{algo}");

        let (res, out) = check(&[p, algo.as_str(), "0123"], &HashCheckConfig::default());
        let outcome = res.unwrap();
        assert_eq!(outcome, ComparisonOutcome::Mismatch, "{algo}");
        assert_eq!(outcome.exit_code(), 1);
        assert!(out.ends_with("FAILED: hash does NOT match.\n"));
    }
}

#[test]
fn small_read_buffer_gives_same_result() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let body: Vec<u8> = (0u8..=255).cycle().take(10_001).collect();
    fs::write(&path, &body).unwrap();
    let expected = digest_bytes(&body, HashAlgorithm::Sha384).hex;

    let cfg = HashCheckConfig {
        read_buffer_bytes: 13,
        ..HashCheckConfig::default()
    };
    let (res, _) = check(&[path.to_str().unwrap(), "sha384", &expected], &cfg);
    assert_eq!(res.unwrap(), ComparisonOutcome::Match);
}

#[test]
fn usage_errors_exit_2_and_print_nothing() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.bin");
    fs::write(&present, b"x").unwrap();
    let missing = dir.path().join("missing.bin");

    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec![""],
        vec![missing.to_str().unwrap()],
        vec![dir.path().to_str().unwrap()],
        vec![present.to_str().unwrap(), "sha3"],
        vec![present.to_str().unwrap(), "MD5"],
    ];
    for args in cases {
        let (res, out) = check(&args, &HashCheckConfig::default());
        let err = res.unwrap_err();
        assert_eq!(err.exit_code(), 2, "{args:?}: {err}");
        assert!(out.is_empty(), "{args:?}");
    }
}
