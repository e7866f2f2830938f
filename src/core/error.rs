//! Error types for PHC operations.
//!
//! A single error type covers both the string codec and the algorithm
//! collaborators, so callers can tell a wrong password (`Ok(false)`) apart
//! from a record that could not be read at all (`Err(_)`).

use thiserror::Error;

use crate::core::codec::Segment;

/// Errors that can occur when encoding, decoding or verifying PHC strings.
#[derive(Debug, Error)]
pub enum PhcError {
    /// The string does not split into the six `$`-delimited segments.
    #[error("Malformed PHC string: expected 6 segments, found {segments}")]
    MalformedInput {
        /// Number of segments actually found.
        segments: usize,
    },

    /// A binary segment is not valid unpadded base64.
    #[error("Invalid base64 in {segment} segment: {source}")]
    InvalidEncoding {
        /// The segment that failed to decode.
        segment: Segment,
        /// The underlying decoder error.
        #[source]
        source: base64::DecodeError,
    },

    /// The version segment is present but is not `v=<decimal>`.
    #[error("Invalid version segment: {0:?}")]
    InvalidVersion(String),

    /// A parameter token is malformed, duplicated, or fails numeric parsing.
    #[error("Invalid parameter: {0:?}")]
    InvalidParameter(String),

    /// A parameter required by the algorithm is absent.
    #[error("Missing parameter: {0:?}")]
    MissingParameter(String),

    /// The identifier or name does not match any supported algorithm.
    #[error("Unknown or unsupported algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// The record was produced by a different algorithm than the one requested.
    #[error("Algorithm mismatch: expected {expected}, found {found:?}")]
    AlgorithmMismatch {
        /// The algorithm the caller asked for.
        expected: &'static str,
        /// The identifier found in the record.
        found: String,
    },

    /// The PBKDF2 digest is unknown or not enabled.
    #[error("Unsupported hash function: {0:?}")]
    UnsupportedHashFunction(String),

    /// Hashing or verifying an empty password was requested.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// The KDF rejected its parameters or output length.
    #[error("Key derivation failed")]
    KeyDerivationFailed,

    /// The authenticated ciphertext did not verify.
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Generic cryptographic error (RNG or cipher setup).
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for PHC operations.
pub type PhcResult<T> = Result<T, PhcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhcError::MalformedInput { segments: 1 };
        assert_eq!(
            err.to_string(),
            "Malformed PHC string: expected 6 segments, found 1"
        );

        let err = PhcError::InvalidVersion("x=1".to_string());
        assert_eq!(err.to_string(), "Invalid version segment: \"x=1\"");

        let err = PhcError::InvalidParameter("m".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: \"m\"");

        let err = PhcError::MissingParameter("t".to_string());
        assert_eq!(err.to_string(), "Missing parameter: \"t\"");

        let err = PhcError::UnknownAlgorithm("argon3".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown or unsupported algorithm: \"argon3\""
        );

        let err = PhcError::AlgorithmMismatch {
            expected: "scrypt",
            found: "argon2id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Algorithm mismatch: expected scrypt, found \"argon2id\""
        );

        let err = PhcError::EmptyPassword;
        assert_eq!(err.to_string(), "Password must not be empty");

        let err = PhcError::KeyDerivationFailed;
        assert_eq!(err.to_string(), "Key derivation failed");

        let err = PhcError::DecryptionFailed;
        assert_eq!(err.to_string(), "Decryption failed");

        let err = PhcError::CryptoError;
        assert_eq!(err.to_string(), "Cryptographic operation failed");
    }

    #[test]
    fn test_invalid_encoding_names_segment() {
        let err = PhcError::InvalidEncoding {
            segment: Segment::Hash,
            source: base64::DecodeError::InvalidPadding,
        };
        assert!(err.to_string().starts_with("Invalid base64 in hash segment"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = PhcError::EmptyPassword;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("EmptyPassword"));
    }
}
