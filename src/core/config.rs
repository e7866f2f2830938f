//! Algorithm-agnostic hashing configuration.
//!
//! [`Config`] carries optional overrides. Each algorithm's parameter type
//! resolves it with a pure `from_config` that fills every absent field from
//! that algorithm's defaults, so nothing is shared or mutated between calls.
//!
//! | Field         | Argon2      | bcrypt | scrypt       | PBKDF2     |
//! |---------------|-------------|--------|--------------|------------|
//! | `cost`        | memory KiB  | -      | `ln` (log2 N) | -          |
//! | `rounds`      | iterations  | cost   | block size r | iterations |
//! | `parallelism` | lanes       | -      | p            | -          |
//! | `key_len`     | output len  | -      | output len   | output len |
//! | `salt_len`    | salt len    | -      | salt len     | salt len   |

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::PhcError;

/// Argon2 variant, encoded as the suffix of the `argon2` identifier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argon2Variant {
    /// Argon2id (hybrid). Recommended.
    #[default]
    Id,
    /// Argon2i (data-independent).
    I,
    /// Argon2d (data-dependent).
    D,
}

impl Argon2Variant {
    /// Returns the identifier suffix (`id`, `i` or `d`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::I => "i",
            Self::D => "d",
        }
    }

    /// Parses an identifier suffix.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "id" => Some(Self::Id),
            "i" => Some(Self::I),
            "d" => Some(Self::D),
            _ => None,
        }
    }
}

/// Digest used as the PBKDF2 pseudo-random function.
///
/// `Sha1` and `Md5` only derive when the `legacy-digests` feature is on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// HMAC-SHA-1.
    Sha1,
    /// HMAC-SHA-224.
    Sha224,
    /// HMAC-SHA-256.
    #[default]
    Sha256,
    /// HMAC-SHA-384.
    Sha384,
    /// HMAC-SHA-512.
    Sha512,
    /// HMAC-MD5.
    Md5,
}

impl HashFunction {
    /// Returns the digest name used in the `pbkdf2<name>` identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Md5 => "md5",
        }
    }
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFunction {
    type Err = PhcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            "md5" => Ok(Self::Md5),
            other => Err(PhcError::UnsupportedHashFunction(other.to_owned())),
        }
    }
}

/// Optional overrides applied on top of each algorithm's defaults.
///
/// # Example
///
/// ```rust
/// use phc_crypto::Config;
///
/// let config = Config::new().rounds(3).parallelism(2);
/// assert_eq!(config.rounds, Some(3));
/// assert_eq!(config.cost, None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Memory cost (Argon2, KiB) or `ln` (scrypt).
    pub cost: Option<u32>,
    /// Iterations (Argon2, PBKDF2), cost (bcrypt) or block size (scrypt).
    pub rounds: Option<u32>,
    /// Degree of parallelism (Argon2, scrypt).
    pub parallelism: Option<u32>,
    /// Output length in bytes.
    pub key_len: Option<usize>,
    /// Salt length in bytes.
    pub salt_len: Option<usize>,
    /// Argon2 variant.
    pub variant: Option<Argon2Variant>,
    /// PBKDF2 digest.
    pub hash_func: Option<HashFunction>,
}

impl Config {
    /// Creates a configuration with no overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cost: None,
            rounds: None,
            parallelism: None,
            key_len: None,
            salt_len: None,
            variant: None,
            hash_func: None,
        }
    }

    /// Sets the cost.
    #[must_use]
    pub const fn cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the rounds.
    #[must_use]
    pub const fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// Sets the parallelism.
    #[must_use]
    pub const fn parallelism(mut self, parallelism: u32) -> Self {
        self.parallelism = Some(parallelism);
        self
    }

    /// Sets the output length.
    #[must_use]
    pub const fn key_len(mut self, key_len: usize) -> Self {
        self.key_len = Some(key_len);
        self
    }

    /// Sets the salt length.
    #[must_use]
    pub const fn salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = Some(salt_len);
        self
    }

    /// Sets the Argon2 variant.
    #[must_use]
    pub const fn variant(mut self, variant: Argon2Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the PBKDF2 digest.
    #[must_use]
    pub const fn hash_func(mut self, hash_func: HashFunction) -> Self {
        self.hash_func = Some(hash_func);
        self
    }
}
