//! Builder patterns for password hashing.
//!
//! This module provides fluent builder APIs for the tunable algorithms
//! with preset security profiles.
//!
//! # Security Profiles
//!
//! | Profile | Argon2 | scrypt | PBKDF2 |
//! |---------|--------|--------|--------|
//! | `interactive()` | 64 MiB, t=2 | N=2^15, r=8 | 100,000 rounds |
//! | `moderate()` | 256 MiB, t=3 | N=2^17, r=8 | 310,000 rounds |
//! | `sensitive()` | 1 GiB, t=4 | N=2^20, r=8 | 600,000 rounds |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "argon2")]
//! # fn main() -> Result<(), phc_crypto::PhcError> {
//! use phc_crypto::prelude::*;
//!
//! let phc = Argon2Builder::new()
//!     .memory_kib(64)
//!     .iterations(1)
//!     .parallelism(1)
//!     .hash(b"password")?;
//! assert!(phc.starts_with("$argon2id$v=19$m=64,p=1,t=1$"));
//! assert!(verify_any(&phc, "password")?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "argon2"))]
//! # fn main() {}
//! ```

#[cfg(any(feature = "argon2", feature = "scrypt", feature = "pbkdf2"))]
use crate::core::algorithm::PasswordHashAlgorithm;
#[cfg(any(feature = "argon2", feature = "scrypt", feature = "pbkdf2"))]
use crate::core::codec::serialize;
#[cfg(any(feature = "argon2", feature = "scrypt", feature = "pbkdf2"))]
use crate::core::error::PhcResult;

#[cfg(feature = "argon2")]
use crate::core::algorithms::{Argon2, Argon2Params};
#[cfg(feature = "argon2")]
use crate::core::config::Argon2Variant;

#[cfg(feature = "scrypt")]
use crate::core::algorithms::{Scrypt, ScryptParams};

#[cfg(feature = "pbkdf2")]
use crate::core::algorithms::{Pbkdf2, Pbkdf2Params};
#[cfg(feature = "pbkdf2")]
use crate::core::config::HashFunction;

/// Builder for Argon2 hashes.
///
/// Defaults to the moderate profile.
#[cfg(feature = "argon2")]
#[derive(Debug, Clone, Copy)]
pub struct Argon2Builder {
    params: Argon2Params,
}

#[cfg(feature = "argon2")]
impl Default for Argon2Builder {
    fn default() -> Self {
        Self::moderate()
    }
}

#[cfg(feature = "argon2")]
impl Argon2Builder {
    /// Creates a new builder with default (moderate) parameters.
    ///
    /// Equivalent to calling `Argon2Builder::moderate()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::moderate()
    }

    /// Interactive profile: Fast enough for user logins.
    ///
    /// - Memory: 64 MiB
    /// - Iterations: 2
    /// - Parallelism: 1
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            params: Argon2Params::interactive(),
        }
    }

    /// Moderate profile: Balanced security and performance.
    ///
    /// - Memory: 256 MiB
    /// - Iterations: 3
    /// - Parallelism: 1
    ///
    /// This is the recommended default for most applications.
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            params: Argon2Params::moderate(),
        }
    }

    /// Sensitive profile: High security for long-term storage.
    ///
    /// - Memory: 1 GiB
    /// - Iterations: 4
    /// - Parallelism: 1
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            params: Argon2Params::sensitive(),
        }
    }

    /// Sets the variant.
    #[must_use]
    pub const fn variant(mut self, variant: Argon2Variant) -> Self {
        self.params.variant = variant;
        self
    }

    /// Sets the memory cost in KiB.
    ///
    /// Higher values increase resistance to GPU-based attacks
    /// but require more RAM during hashing.
    #[must_use]
    pub const fn memory_kib(mut self, memory_kib: u32) -> Self {
        self.params.memory_kib = memory_kib;
        self
    }

    /// Sets the number of iterations (time cost).
    #[must_use]
    pub const fn iterations(mut self, iterations: u32) -> Self {
        self.params.iterations = iterations;
        self
    }

    /// Sets the degree of parallelism.
    #[must_use]
    pub const fn parallelism(mut self, parallelism: u32) -> Self {
        self.params.parallelism = parallelism;
        self
    }

    /// Sets the output length in bytes.
    #[must_use]
    pub const fn key_len(mut self, key_len: usize) -> Self {
        self.params.key_len = key_len;
        self
    }

    /// Sets the salt length in bytes.
    #[must_use]
    pub const fn salt_len(mut self, salt_len: usize) -> Self {
        self.params.salt_len = salt_len;
        self
    }

    /// Returns the parameters this builder will hash with.
    #[must_use]
    pub const fn to_params(&self) -> Argon2Params {
        self.params
    }

    /// Hashes `password` and returns the PHC string.
    ///
    /// # Errors
    ///
    /// Returns an error if the password is empty or the parameters are
    /// rejected by Argon2.
    pub fn hash(self, password: &[u8]) -> PhcResult<String> {
        Argon2::hash(password, &self.params).map(|fields| serialize(&fields))
    }
}

/// Builder for scrypt hashes.
///
/// Defaults to the moderate profile.
#[cfg(feature = "scrypt")]
#[derive(Debug, Clone, Copy)]
pub struct ScryptBuilder {
    params: ScryptParams,
}

#[cfg(feature = "scrypt")]
impl Default for ScryptBuilder {
    fn default() -> Self {
        Self::moderate()
    }
}

#[cfg(feature = "scrypt")]
impl ScryptBuilder {
    /// Creates a new builder with default (moderate) parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self::moderate()
    }

    const fn with_log_n(ln: u8) -> Self {
        Self {
            params: ScryptParams {
                ln,
                r: 8,
                p: 1,
                key_len: 32,
                salt_len: 16,
            },
        }
    }

    /// Interactive profile: N = 2^15, r = 8, p = 1 (32 MiB).
    #[must_use]
    pub const fn interactive() -> Self {
        Self::with_log_n(15)
    }

    /// Moderate profile: N = 2^17, r = 8, p = 1 (128 MiB).
    #[must_use]
    pub const fn moderate() -> Self {
        Self::with_log_n(17)
    }

    /// Sensitive profile: N = 2^20, r = 8, p = 1 (1 GiB).
    #[must_use]
    pub const fn sensitive() -> Self {
        Self::with_log_n(20)
    }

    /// Sets log2 of the CPU/memory cost N.
    #[must_use]
    pub const fn log_n(mut self, ln: u8) -> Self {
        self.params.ln = ln;
        self
    }

    /// Sets the block size.
    #[must_use]
    pub const fn block_size(mut self, r: u32) -> Self {
        self.params.r = r;
        self
    }

    /// Sets the parallelism.
    #[must_use]
    pub const fn parallelism(mut self, p: u32) -> Self {
        self.params.p = p;
        self
    }

    /// Sets the output length in bytes.
    #[must_use]
    pub const fn key_len(mut self, key_len: usize) -> Self {
        self.params.key_len = key_len;
        self
    }

    /// Sets the salt length in bytes.
    #[must_use]
    pub const fn salt_len(mut self, salt_len: usize) -> Self {
        self.params.salt_len = salt_len;
        self
    }

    /// Returns the parameters this builder will hash with.
    #[must_use]
    pub const fn to_params(&self) -> ScryptParams {
        self.params
    }

    /// Hashes `password` and returns the PHC string.
    ///
    /// # Errors
    ///
    /// Returns an error if the password is empty or the parameters are
    /// rejected by scrypt.
    pub fn hash(self, password: &[u8]) -> PhcResult<String> {
        Scrypt::hash(password, &self.params).map(|fields| serialize(&fields))
    }
}

/// Builder for PBKDF2 hashes.
///
/// Defaults to the moderate profile with HMAC-SHA-256.
#[cfg(feature = "pbkdf2")]
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2Builder {
    params: Pbkdf2Params,
}

#[cfg(feature = "pbkdf2")]
impl Default for Pbkdf2Builder {
    fn default() -> Self {
        Self::moderate()
    }
}

#[cfg(feature = "pbkdf2")]
impl Pbkdf2Builder {
    /// Creates a new builder with default (moderate) parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self::moderate()
    }

    /// Interactive profile: 100,000 rounds.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            params: Pbkdf2Params::interactive(),
        }
    }

    /// Moderate profile: 310,000 rounds.
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            params: Pbkdf2Params::moderate(),
        }
    }

    /// Sensitive profile: 600,000 rounds.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            params: Pbkdf2Params::sensitive(),
        }
    }

    /// Sets the number of rounds.
    #[must_use]
    pub const fn rounds(mut self, rounds: u32) -> Self {
        self.params.rounds = rounds;
        self
    }

    /// Sets the HMAC digest.
    #[must_use]
    pub const fn hash_func(mut self, hash_func: HashFunction) -> Self {
        self.params.hash_func = hash_func;
        self
    }

    /// Sets the output length in bytes.
    #[must_use]
    pub const fn key_len(mut self, key_len: usize) -> Self {
        self.params.key_len = key_len;
        self
    }

    /// Sets the salt length in bytes.
    #[must_use]
    pub const fn salt_len(mut self, salt_len: usize) -> Self {
        self.params.salt_len = salt_len;
        self
    }

    /// Returns the parameters this builder will hash with.
    #[must_use]
    pub const fn to_params(&self) -> Pbkdf2Params {
        self.params
    }

    /// Hashes `password` and returns the PHC string.
    ///
    /// # Errors
    ///
    /// Returns an error if the password is empty, the digest is not
    /// available, or the parameters are rejected.
    pub fn hash(self, password: &[u8]) -> PhcResult<String> {
        Pbkdf2::hash(password, &self.params).map(|fields| serialize(&fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "argon2")]
    fn test_argon2_builder_profiles() {
        let interactive = Argon2Builder::interactive().to_params();
        assert_eq!(interactive.memory_kib, 64 * 1024);
        assert_eq!(interactive.iterations, 2);

        let moderate = Argon2Builder::moderate().to_params();
        assert_eq!(moderate.memory_kib, 256 * 1024);
        assert_eq!(moderate.iterations, 3);

        let sensitive = Argon2Builder::sensitive().to_params();
        assert_eq!(sensitive.memory_kib, 1024 * 1024);
        assert_eq!(sensitive.iterations, 4);

        assert_eq!(Argon2Builder::default().to_params(), moderate);
        assert_eq!(Argon2Builder::new().to_params(), moderate);
    }

    #[test]
    #[cfg(feature = "argon2")]
    fn test_argon2_builder_custom() -> PhcResult<()> {
        let builder = Argon2Builder::new()
            .variant(Argon2Variant::D)
            .memory_kib(64)
            .iterations(1)
            .parallelism(1)
            .key_len(16)
            .salt_len(8);
        let params = builder.to_params();
        assert_eq!(params.variant, Argon2Variant::D);
        assert_eq!(params.key_len, 16);
        assert_eq!(params.salt_len, 8);

        let phc = builder.hash(b"password")?;
        assert!(phc.starts_with("$argon2d$v=19$m=64,p=1,t=1$"));
        Ok(())
    }

    #[test]
    #[cfg(feature = "scrypt")]
    fn test_scrypt_builder_profiles() {
        assert_eq!(ScryptBuilder::interactive().to_params().ln, 15);
        assert_eq!(ScryptBuilder::moderate().to_params().ln, 17);
        assert_eq!(ScryptBuilder::sensitive().to_params().ln, 20);
        assert_eq!(ScryptBuilder::new().to_params().r, 8);
        assert_eq!(ScryptBuilder::default().to_params().p, 1);
    }

    #[test]
    #[cfg(feature = "scrypt")]
    fn test_scrypt_builder_hash() -> PhcResult<()> {
        let phc = ScryptBuilder::new()
            .log_n(4)
            .block_size(1)
            .parallelism(1)
            .key_len(16)
            .hash(b"password")?;
        assert!(phc.starts_with("$scrypt$v=0$ln=4,p=1,r=1$"));
        Ok(())
    }

    #[test]
    #[cfg(feature = "pbkdf2")]
    fn test_pbkdf2_builder() -> PhcResult<()> {
        assert_eq!(Pbkdf2Builder::interactive().to_params().rounds, 100_000);
        assert_eq!(Pbkdf2Builder::moderate().to_params().rounds, 310_000);
        assert_eq!(Pbkdf2Builder::sensitive().to_params().rounds, 600_000);

        let phc = Pbkdf2Builder::new()
            .rounds(3)
            .hash_func(HashFunction::Sha384)
            .hash(b"password")?;
        assert!(phc.starts_with("$pbkdf2sha384$v=0$i=3$"));
        Ok(())
    }
}
