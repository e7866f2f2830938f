//! Integration tests driven by JSON test vectors.
//!
//! `phc.json` covers the codec on its own; `algorithms.json` and
//! `legacy.json` are known-answer tests verified through [`verify_any`].

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod vectors;

use std::path::PathBuf;

use phc_crypto::{deserialize, serialize, verify_any, ParamValue, PhcError};
use vectors::*;

/// Get the path to the test vectors directory.
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

fn error_class(err: &PhcError) -> &'static str {
    match err {
        PhcError::MalformedInput { .. } => "malformed",
        PhcError::InvalidVersion(_) => "version",
        PhcError::InvalidParameter(_) => "parameter",
        PhcError::InvalidEncoding { .. } => "encoding",
        _ => "other",
    }
}

// =============================================================================
// Codec
// =============================================================================

#[test]
fn test_phc_vectors() {
    let path = vectors_dir().join("phc.json");
    let suite: TestVectorSuite<PhcTestVector> = load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let result = deserialize(&test.phc);

        if test.expect_fail {
            let err = result.expect_err(&format!("Test '{}' should have failed", test.name));
            assert_eq!(
                error_class(&err),
                test.error.as_deref().expect("error class required for fail test"),
                "Test '{}' failed with the wrong error: {err}",
                test.name
            );
            continue;
        }

        let fields = result.unwrap_or_else(|e| panic!("Test '{}' failed: {e}", test.name));

        assert_eq!(Some(&fields.id), test.id.as_ref(), "Test '{}': id", test.name);
        assert_eq!(Some(fields.version), test.version, "Test '{}': version", test.name);

        let expected_params = test.params.expect("params required for success test");
        assert_eq!(fields.params.len(), expected_params.len(), "Test '{}'", test.name);
        for (key, value) in &expected_params {
            assert_eq!(
                fields.param(key),
                Some(&ParamValue::Str(value.clone())),
                "Test '{}': param {key}",
                test.name
            );
        }

        let salt = hex_decode(test.salt.as_ref().expect("salt required")).expect("valid hex");
        let hash = hex_decode(test.hash.as_ref().expect("hash required")).expect("valid hex");
        assert_eq!(fields.salt, salt, "Test '{}': salt", test.name);
        assert_eq!(fields.hash, hash, "Test '{}': hash", test.name);

        let expected_string = test.canonical.as_deref().unwrap_or(&test.phc);
        assert_eq!(serialize(&fields), expected_string, "Test '{}': serialize", test.name);
    }
}

// =============================================================================
// Algorithms
// =============================================================================

fn run_algorithm_vectors(file: &str) {
    let path = vectors_dir().join(file);
    let suite: TestVectorSuite<AlgorithmTestVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let result = verify_any(&test.phc, &test.password);

        if test.expect_fail {
            assert!(
                result.is_err(),
                "Test '{}' should have failed but returned {result:?}",
                test.name
            );
        } else {
            let matched = result.unwrap_or_else(|e| panic!("Test '{}' failed: {e}", test.name));
            assert_eq!(matched, !test.mismatch, "Test '{}'", test.name);
        }
    }
}

#[test]
#[cfg(all(feature = "argon2", feature = "scrypt", feature = "pbkdf2"))]
fn test_algorithm_vectors() {
    run_algorithm_vectors("algorithms.json");
}

#[test]
#[cfg(feature = "legacy-digests")]
fn test_legacy_vectors() {
    run_algorithm_vectors("legacy.json");
}

#[test]
#[cfg(all(feature = "pbkdf2", not(feature = "legacy-digests")))]
fn test_legacy_vectors_refused() {
    let path = vectors_dir().join("legacy.json");
    let suite: TestVectorSuite<AlgorithmTestVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let result = verify_any(&test.phc, &test.password);
        assert!(
            matches!(result, Err(PhcError::UnsupportedHashFunction(_))),
            "Test '{}' should be refused without legacy-digests, got {result:?}",
            test.name
        );
    }
}
