//! PBKDF2 hashing.
//!
//! The digest is part of the identifier: `$pbkdf2sha256$v=0$i=4096$...`.
//! SHA-1 and MD5 are only derivable with the `legacy-digests` feature; the
//! identifiers still parse without it so the error says which digest was
//! refused.

use hmac::Hmac;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use super::{digests_match, ensure_at_most, ensure_password, random_bytes};
use crate::core::algorithm::{ensure_id, sealed, PasswordHashAlgorithm};
use crate::core::config::{Config, HashFunction};
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

/// Default iteration count.
pub const DEFAULT_ROUNDS: u32 = 4096;

/// Default output length in bytes.
pub const DEFAULT_KEY_LEN: usize = 32;

/// Default salt length in bytes.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Largest iteration count accepted from a record on verify.
pub const MAX_ROUNDS: u32 = 10_000_000;

/// PBKDF2 marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pbkdf2;

impl sealed::Sealed for Pbkdf2 {}

/// PBKDF2 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Params {
    /// Number of iterations.
    pub rounds: u32,
    /// HMAC digest.
    pub hash_func: HashFunction,
    /// Output length in bytes.
    pub key_len: usize,
    /// Salt length in bytes.
    pub salt_len: usize,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            hash_func: HashFunction::Sha256,
            key_len: DEFAULT_KEY_LEN,
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl Pbkdf2Params {
    /// Interactive profile: Fast, suitable for interactive logins.
    /// - Iterations: 100,000
    #[must_use]
    pub const fn interactive() -> Self {
        Self::with_rounds(100_000)
    }

    /// Moderate profile: Balanced security and performance.
    /// - Iterations: 310,000
    #[must_use]
    pub const fn moderate() -> Self {
        Self::with_rounds(310_000)
    }

    /// Sensitive profile: High security, slower computation.
    /// - Iterations: 600,000
    #[must_use]
    pub const fn sensitive() -> Self {
        Self::with_rounds(600_000)
    }

    const fn with_rounds(rounds: u32) -> Self {
        Self {
            rounds,
            hash_func: HashFunction::Sha256,
            key_len: DEFAULT_KEY_LEN,
            salt_len: DEFAULT_SALT_LEN,
        }
    }

    /// Fills every field `config` leaves unset from [`Pbkdf2Params::default`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            rounds: config.rounds.unwrap_or(defaults.rounds),
            hash_func: config.hash_func.unwrap_or(defaults.hash_func),
            key_len: config.key_len.unwrap_or(defaults.key_len),
            salt_len: config.salt_len.unwrap_or(defaults.salt_len),
        }
    }
}

impl PasswordHashAlgorithm for Pbkdf2 {
    const NAME: &'static str = "pbkdf2";
    const ID_PREFIX: &'static str = "pbkdf2";

    type Params = Pbkdf2Params;

    fn params_from_config(config: &Config) -> PhcResult<Self::Params> {
        Ok(Pbkdf2Params::from_config(config))
    }

    fn hash(password: &[u8], params: &Self::Params) -> PhcResult<PhcFields> {
        ensure_password(password)?;

        let salt = random_bytes(params.salt_len)?;
        let mut digest = vec![0u8; params.key_len];
        derive(params.hash_func, password, &salt, params.rounds, &mut digest)?;

        Ok(
            PhcFields::new(format!("{}{}", Self::ID_PREFIX, params.hash_func.name()))
                .with_param("i", params.rounds)
                .with_salt(salt)
                .with_hash(digest),
        )
    }

    fn verify(fields: &PhcFields, password: &[u8]) -> PhcResult<bool> {
        ensure_password(password)?;
        ensure_id::<Self>(fields)?;

        let hash_func: HashFunction = fields.id[Self::ID_PREFIX.len()..].parse()?;
        let rounds = ensure_at_most("i", fields.param_as::<u32>("i")?, MAX_ROUNDS)?;

        let mut computed = Zeroizing::new(vec![0u8; fields.hash.len()]);
        derive(hash_func, password, &fields.salt, rounds, &mut computed)?;

        Ok(digests_match(&computed, &fields.hash))
    }
}

fn derive(
    hash_func: HashFunction,
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output: &mut [u8],
) -> PhcResult<()> {
    // An empty output would match an empty stored hash for any password.
    if output.is_empty() || rounds == 0 {
        return Err(PhcError::KeyDerivationFailed);
    }

    let result = match hash_func {
        HashFunction::Sha224 => pbkdf2::pbkdf2::<Hmac<Sha224>>(password, salt, rounds, output),
        HashFunction::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, output),
        HashFunction::Sha384 => pbkdf2::pbkdf2::<Hmac<Sha384>>(password, salt, rounds, output),
        HashFunction::Sha512 => pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, rounds, output),
        #[cfg(feature = "legacy-digests")]
        HashFunction::Sha1 => pbkdf2::pbkdf2::<Hmac<sha1::Sha1>>(password, salt, rounds, output),
        #[cfg(feature = "legacy-digests")]
        HashFunction::Md5 => pbkdf2::pbkdf2::<Hmac<md5::Md5>>(password, salt, rounds, output),
        #[cfg(not(feature = "legacy-digests"))]
        HashFunction::Sha1 | HashFunction::Md5 => {
            return Err(PhcError::UnsupportedHashFunction(
                hash_func.name().to_owned(),
            ))
        }
    };

    result.map_err(|_| PhcError::KeyDerivationFailed)
}
