//! Runtime-selected hashing facade.
//!
//! [`Hasher`] pairs an [`Algorithm`] with a [`Config`] and works on PHC
//! strings end to end. [`verify_any`] picks the algorithm from the record.

use tracing::{debug, warn};

use crate::core::algorithm::{Algorithm, PasswordHashAlgorithm};
use crate::core::codec::{deserialize, serialize};
use crate::core::config::Config;
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

/// Hashes and verifies passwords with one algorithm.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "pbkdf2")]
/// # fn main() -> Result<(), phc_crypto::PhcError> {
/// use phc_crypto::{Algorithm, Config, Hasher};
///
/// let hasher = Hasher::new(Algorithm::Pbkdf2, Config::new().rounds(1000));
/// let phc = hasher.hash("hunter2")?;
/// assert!(phc.starts_with("$pbkdf2sha256$v=0$i=1000$"));
/// assert!(hasher.verify(&phc, "hunter2")?);
/// assert!(!hasher.verify(&phc, "hunter3")?);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "pbkdf2"))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hasher {
    algorithm: Algorithm,
    config: Config,
}

impl Hasher {
    /// Creates a hasher for `algorithm` with `config` overrides.
    #[must_use]
    pub const fn new(algorithm: Algorithm, config: Config) -> Self {
        Self { algorithm, config }
    }

    /// Creates a hasher from an algorithm name such as `"argon2"`.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::UnknownAlgorithm` if the name is not an enabled
    /// algorithm.
    pub fn from_name(name: &str, config: Config) -> PhcResult<Self> {
        Ok(Self::new(name.parse()?, config))
    }

    /// Returns the selected algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Hashes `password` and returns the PHC string.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::EmptyPassword` for an empty password, or the
    /// algorithm's error if the configuration is rejected.
    pub fn hash(&self, password: &str) -> PhcResult<String> {
        if password.is_empty() {
            return Err(PhcError::EmptyPassword);
        }

        debug!(algorithm = %self.algorithm, "hashing password");
        let fields = dispatch_hash(self.algorithm, password.as_bytes(), &self.config)?;
        Ok(serialize(&fields))
    }

    /// Verifies `password` against a PHC string.
    ///
    /// # Errors
    ///
    /// - any decoding error from [`deserialize`]
    /// - `PhcError::AlgorithmMismatch` if the record was produced by a
    ///   different algorithm
    /// - the algorithm's error if the record's parameters are unusable
    pub fn verify(&self, hash: &str, password: &str) -> PhcResult<bool> {
        let fields = deserialize(hash)?;
        self.verify_fields(&fields, password)
    }

    /// Verifies `password` against already decoded fields.
    ///
    /// # Errors
    ///
    /// Same as [`Hasher::verify`], minus decoding errors.
    pub fn verify_fields(&self, fields: &PhcFields, password: &str) -> PhcResult<bool> {
        if password.is_empty() {
            return Err(PhcError::EmptyPassword);
        }

        if !self.algorithm.matches(&fields.id) {
            warn!(
                expected = %self.algorithm,
                id = %fields.id,
                "record belongs to another algorithm"
            );
            return Err(PhcError::AlgorithmMismatch {
                expected: self.algorithm.name(),
                found: fields.id.clone(),
            });
        }

        debug!(algorithm = %self.algorithm, id = %fields.id, "verifying password");
        dispatch_verify(self.algorithm, fields, password.as_bytes())
    }
}

/// Verifies `password` against a PHC string, choosing the algorithm from
/// the record's identifier.
///
/// # Errors
///
/// - any decoding error from [`deserialize`]
/// - `PhcError::UnknownAlgorithm` if no enabled algorithm claims the id
/// - `PhcError::EmptyPassword` for an empty password
/// - the algorithm's error if the record's parameters are unusable
pub fn verify_any(hash: &str, password: &str) -> PhcResult<bool> {
    if password.is_empty() {
        return Err(PhcError::EmptyPassword);
    }

    let fields = deserialize(hash)?;
    let algorithm = Algorithm::from_id(&fields.id).map_err(|e| {
        warn!(id = %fields.id, "no enabled algorithm for record");
        e
    })?;

    debug!(%algorithm, id = %fields.id, "verifying password");
    dispatch_verify(algorithm, &fields, password.as_bytes())
}

fn hash_with<A: PasswordHashAlgorithm>(password: &[u8], config: &Config) -> PhcResult<PhcFields> {
    let params = A::params_from_config(config)?;
    A::hash(password, &params)
}

fn dispatch_hash(algorithm: Algorithm, password: &[u8], config: &Config) -> PhcResult<PhcFields> {
    use crate::core::algorithms;

    match algorithm {
        #[cfg(feature = "argon2")]
        Algorithm::Argon2 => hash_with::<algorithms::Argon2>(password, config),
        #[cfg(feature = "bcrypt")]
        Algorithm::Bcrypt => hash_with::<algorithms::Bcrypt>(password, config),
        #[cfg(feature = "scrypt")]
        Algorithm::Scrypt => hash_with::<algorithms::Scrypt>(password, config),
        #[cfg(feature = "pbkdf2")]
        Algorithm::Pbkdf2 => hash_with::<algorithms::Pbkdf2>(password, config),
        #[cfg(feature = "chacha20poly1305")]
        Algorithm::ChaCha20Poly1305 => {
            hash_with::<algorithms::ChaCha20Poly1305>(password, config)
        }
    }
}

fn dispatch_verify(algorithm: Algorithm, fields: &PhcFields, password: &[u8]) -> PhcResult<bool> {
    use crate::core::algorithms;

    match algorithm {
        #[cfg(feature = "argon2")]
        Algorithm::Argon2 => algorithms::Argon2::verify(fields, password),
        #[cfg(feature = "bcrypt")]
        Algorithm::Bcrypt => algorithms::Bcrypt::verify(fields, password),
        #[cfg(feature = "scrypt")]
        Algorithm::Scrypt => algorithms::Scrypt::verify(fields, password),
        #[cfg(feature = "pbkdf2")]
        Algorithm::Pbkdf2 => algorithms::Pbkdf2::verify(fields, password),
        #[cfg(feature = "chacha20poly1305")]
        Algorithm::ChaCha20Poly1305 => algorithms::ChaCha20Poly1305::verify(fields, password),
    }
}
