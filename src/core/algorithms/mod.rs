//! Algorithm implementations.
//!
//! Each module wraps one primitive from its RustCrypto (or `bcrypt`) crate
//! and maps it onto [`PhcFields`](crate::core::fields::PhcFields):
//!
//! | Marker               | Identifier(s)                     | Params          |
//! |----------------------|-----------------------------------|-----------------|
//! | [`Argon2`]           | `argon2id`, `argon2i`, `argon2d`  | `m`, `t`, `p`   |
//! | [`Bcrypt`]           | `bcrypt`                          | `r`             |
//! | [`Scrypt`]           | `scrypt`                          | `ln`, `r`, `p`  |
//! | [`Pbkdf2`]           | `pbkdf2sha256`, `pbkdf2sha512`, ... | `i`           |
//! | [`ChaCha20Poly1305`] | `chacha20poly1305`                | -               |

#[cfg(feature = "argon2")]
mod argon2_impl;

#[cfg(feature = "bcrypt")]
mod bcrypt_impl;

#[cfg(feature = "scrypt")]
mod scrypt_impl;

#[cfg(feature = "pbkdf2")]
mod pbkdf2_impl;

#[cfg(feature = "chacha20poly1305")]
mod chacha20poly1305_impl;

#[cfg(feature = "argon2")]
pub use argon2_impl::{Argon2, Argon2Params, ARGON2_VERSION};

#[cfg(feature = "bcrypt")]
pub use bcrypt_impl::{Bcrypt, BcryptParams};

#[cfg(feature = "scrypt")]
pub use scrypt_impl::{Scrypt, ScryptParams};

#[cfg(feature = "pbkdf2")]
pub use pbkdf2_impl::{Pbkdf2, Pbkdf2Params};

#[cfg(feature = "chacha20poly1305")]
pub use chacha20poly1305_impl::{ChaCha20Poly1305, CHACHA20_KEY_SIZE, XCHACHA20_NONCE_SIZE};

#[cfg(any(
    feature = "argon2",
    feature = "bcrypt",
    feature = "scrypt",
    feature = "pbkdf2",
    feature = "chacha20poly1305"
))]
use crate::core::error::{PhcError, PhcResult};

/// Fills a fresh buffer of `len` bytes from the OS RNG.
#[cfg(any(
    feature = "argon2",
    feature = "bcrypt",
    feature = "scrypt",
    feature = "pbkdf2",
    feature = "chacha20poly1305"
))]
pub(crate) fn random_bytes(len: usize) -> PhcResult<Vec<u8>> {
    use rand_core::{OsRng, TryRngCore};

    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| PhcError::CryptoError)?;
    Ok(bytes)
}

#[cfg(any(
    feature = "argon2",
    feature = "bcrypt",
    feature = "scrypt",
    feature = "pbkdf2",
    feature = "chacha20poly1305"
))]
pub(crate) fn ensure_password(password: &[u8]) -> PhcResult<()> {
    if password.is_empty() {
        Err(PhcError::EmptyPassword)
    } else {
        Ok(())
    }
}

/// Constant-time equality; slices of different length are unequal.
#[cfg(any(
    feature = "argon2",
    feature = "scrypt",
    feature = "pbkdf2",
    feature = "chacha20poly1305"
))]
pub(crate) fn digests_match(computed: &[u8], stored: &[u8]) -> bool {
    use subtle::ConstantTimeEq;

    computed.ct_eq(stored).into()
}

/// Refuses a cost parameter read from a record when it exceeds `max`.
#[cfg(any(feature = "argon2", feature = "scrypt", feature = "pbkdf2"))]
pub(crate) fn ensure_at_most<T: PartialOrd>(key: &str, value: T, max: T) -> PhcResult<T> {
    if value > max {
        Err(PhcError::InvalidParameter(key.to_owned()))
    } else {
        Ok(value)
    }
}

#[cfg(all(
    test,
    feature = "argon2",
    feature = "scrypt",
    feature = "pbkdf2",
    feature = "chacha20poly1305"
))]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() -> PhcResult<()> {
        assert_eq!(random_bytes(0)?.len(), 0);
        assert_eq!(random_bytes(16)?.len(), 16);
        Ok(())
    }

    #[test]
    fn test_random_bytes_differ() -> PhcResult<()> {
        assert_ne!(random_bytes(32)?, random_bytes(32)?);
        Ok(())
    }

    #[test]
    fn test_ensure_password() {
        assert!(matches!(ensure_password(b""), Err(PhcError::EmptyPassword)));
        assert!(ensure_password(b"x").is_ok());
    }

    #[test]
    fn test_digests_match() {
        assert!(digests_match(b"abc", b"abc"));
        assert!(!digests_match(b"abc", b"abd"));
        assert!(!digests_match(b"abc", b"abcd"));
    }

    #[test]
    fn test_ensure_at_most() -> PhcResult<()> {
        assert_eq!(ensure_at_most("t", 3u32, 3)?, 3);
        let result = ensure_at_most("t", 4u32, 3);
        assert!(matches!(result, Err(PhcError::InvalidParameter(k)) if k == "t"));
        Ok(())
    }
}
