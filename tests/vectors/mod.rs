//! Test vector types for the PHC codec and algorithm tests.
//!
//! The JSON files next to this module hold the vectors. Algorithm vectors
//! were produced with independent Argon2, scrypt and PBKDF2 implementations.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for the codec alone.
#[derive(Debug, Deserialize)]
pub struct PhcTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Input PHC string
    pub phc: String,
    /// Expected identifier (success only)
    pub id: Option<String>,
    /// Expected version (success only)
    pub version: Option<u32>,
    /// Expected parameters, all as strings (success only)
    pub params: Option<BTreeMap<String, String>>,
    /// Hex-encoded salt (success only)
    pub salt: Option<String>,
    /// Hex-encoded hash (success only)
    pub hash: Option<String>,
    /// Re-serialized form when it differs from `phc`
    pub canonical: Option<String>,
    /// Expected error class: `malformed`, `version`, `parameter`, `encoding`
    pub error: Option<String>,
}

/// Test vector for verifying a password against a stored record.
#[derive(Debug, Deserialize)]
pub struct AlgorithmTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    pub password: String,
    pub phc: String,
    /// The record is valid but the password is wrong
    #[serde(default)]
    pub mismatch: bool,
}

/// Load test vectors from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s)
}
