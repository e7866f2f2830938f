//! Algorithm markers and the uniform hash/verify trait.
//!
//! Each supported algorithm is a zero-sized marker type implementing
//! [`PasswordHashAlgorithm`]. The trait is sealed: the set of algorithms is
//! closed, and [`Algorithm`] enumerates it for runtime dispatch.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use rand_core::{OsRng, TryRngCore};

use crate::core::config::Config;
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Trait for algorithm markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait PasswordHashAlgorithm:
    sealed::Sealed + Default + Clone + Copy + Send + Sync + 'static
{
    /// Name accepted by [`Algorithm::from_str`] (e.g. `"argon2"`).
    const NAME: &'static str;

    /// Prefix every identifier produced by this algorithm starts with.
    const ID_PREFIX: &'static str;

    /// Fully resolved parameters.
    type Params: Default + Clone + Debug;

    /// Resolves a [`Config`] against this algorithm's defaults.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameter` if an override cannot be
    /// represented by this algorithm.
    fn params_from_config(config: &Config) -> PhcResult<Self::Params>;

    /// Hashes `password` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns an error if the password is empty, the parameters are
    /// rejected, or the system RNG fails.
    fn hash(password: &[u8], params: &Self::Params) -> PhcResult<PhcFields>;

    /// Checks `password` against a decoded record.
    ///
    /// Returns `Ok(false)` only when the record is well formed and the
    /// password does not match.
    ///
    /// # Errors
    ///
    /// Returns an error if the record belongs to another algorithm or its
    /// parameters cannot be read.
    fn verify(fields: &PhcFields, password: &[u8]) -> PhcResult<bool>;

    /// Returns true if `id` was produced by this algorithm.
    #[must_use]
    fn matches(id: &str) -> bool {
        id.starts_with(Self::ID_PREFIX)
    }
}

/// Fails with `UnknownAlgorithm` unless `fields.id` belongs to `A`.
pub(crate) fn ensure_id<A: PasswordHashAlgorithm>(fields: &PhcFields) -> PhcResult<()> {
    if A::matches(&fields.id) {
        Ok(())
    } else {
        Err(PhcError::UnknownAlgorithm(fields.id.clone()))
    }
}

/// Runtime selector over the enabled algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Argon2 (`argon2id`, `argon2i`, `argon2d`).
    #[cfg(feature = "argon2")]
    Argon2,
    /// bcrypt.
    #[cfg(feature = "bcrypt")]
    Bcrypt,
    /// scrypt.
    #[cfg(feature = "scrypt")]
    Scrypt,
    /// PBKDF2 (`pbkdf2sha256`, ...).
    #[cfg(feature = "pbkdf2")]
    Pbkdf2,
    /// XChaCha20-Poly1305.
    #[cfg(feature = "chacha20poly1305")]
    ChaCha20Poly1305,
}

impl Algorithm {
    /// Every enabled algorithm.
    pub const ALL: &'static [Self] = &[
        #[cfg(feature = "argon2")]
        Self::Argon2,
        #[cfg(feature = "bcrypt")]
        Self::Bcrypt,
        #[cfg(feature = "scrypt")]
        Self::Scrypt,
        #[cfg(feature = "pbkdf2")]
        Self::Pbkdf2,
        #[cfg(feature = "chacha20poly1305")]
        Self::ChaCha20Poly1305,
    ];

    /// Returns the algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "argon2")]
            Self::Argon2 => <crate::core::algorithms::Argon2 as PasswordHashAlgorithm>::NAME,
            #[cfg(feature = "bcrypt")]
            Self::Bcrypt => <crate::core::algorithms::Bcrypt as PasswordHashAlgorithm>::NAME,
            #[cfg(feature = "scrypt")]
            Self::Scrypt => <crate::core::algorithms::Scrypt as PasswordHashAlgorithm>::NAME,
            #[cfg(feature = "pbkdf2")]
            Self::Pbkdf2 => <crate::core::algorithms::Pbkdf2 as PasswordHashAlgorithm>::NAME,
            #[cfg(feature = "chacha20poly1305")]
            Self::ChaCha20Poly1305 => {
                <crate::core::algorithms::ChaCha20Poly1305 as PasswordHashAlgorithm>::NAME
            }
        }
    }

    /// Returns true if `id` was produced by this algorithm.
    #[must_use]
    pub fn matches(self, id: &str) -> bool {
        match self {
            #[cfg(feature = "argon2")]
            Self::Argon2 => crate::core::algorithms::Argon2::matches(id),
            #[cfg(feature = "bcrypt")]
            Self::Bcrypt => crate::core::algorithms::Bcrypt::matches(id),
            #[cfg(feature = "scrypt")]
            Self::Scrypt => crate::core::algorithms::Scrypt::matches(id),
            #[cfg(feature = "pbkdf2")]
            Self::Pbkdf2 => crate::core::algorithms::Pbkdf2::matches(id),
            #[cfg(feature = "chacha20poly1305")]
            Self::ChaCha20Poly1305 => crate::core::algorithms::ChaCha20Poly1305::matches(id),
        }
    }

    /// Identifies the algorithm that produced a record from its `id`.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::UnknownAlgorithm` if no enabled algorithm claims
    /// the identifier.
    pub fn from_id(id: &str) -> PhcResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.matches(id))
            .ok_or_else(|| PhcError::UnknownAlgorithm(id.to_owned()))
    }

    /// Picks one of the enabled algorithms uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::CryptoError` if the system RNG fails, or
    /// `PhcError::UnknownAlgorithm` if no algorithm is enabled.
    pub fn random() -> PhcResult<Self> {
        let count = u32::try_from(Self::ALL.len()).map_err(|_| PhcError::CryptoError)?;
        if count == 0 {
            return Err(PhcError::UnknownAlgorithm(String::new()));
        }

        // Discard the incomplete final block of the u32 range.
        let zone = u32::MAX - (u32::MAX % count);
        loop {
            let n = OsRng.try_next_u32().map_err(|_| PhcError::CryptoError)?;
            if n < zone {
                let index = usize::try_from(n % count).map_err(|_| PhcError::CryptoError)?;
                return Ok(Self::ALL[index]);
            }
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PhcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| PhcError::UnknownAlgorithm(name.to_owned()))
    }
}
