//! Argon2 hashing.
//!
//! Records look like `$argon2id$v=19$m=65536,p=4,t=16$<salt>$<hash>`. The
//! identifier suffix selects the variant and the version is the Argon2
//! version number (16 or 19). The output length is not stored separately:
//! verify derives as many bytes as the stored hash holds.

use argon2::{Algorithm, ParamsBuilder, Version};
use zeroize::Zeroizing;

use super::{digests_match, ensure_at_most, ensure_password, random_bytes};
use crate::core::algorithm::{ensure_id, sealed, PasswordHashAlgorithm};
use crate::core::config::{Argon2Variant, Config};
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

/// Argon2 version written on hash (0x13).
pub const ARGON2_VERSION: u32 = 0x13;

/// Default output length in bytes.
pub const DEFAULT_KEY_LEN: usize = 64;

/// Default number of iterations.
pub const DEFAULT_ITERATIONS: u32 = 16;

/// Default memory cost in KiB (64 MiB).
pub const DEFAULT_MEMORY_KIB: u32 = 64 * 1024;

/// Default degree of parallelism.
pub const DEFAULT_PARALLELISM: u32 = 4;

/// Default salt length in bytes.
pub const DEFAULT_SALT_LEN: usize = 32;

/// Largest memory cost in KiB accepted from a record on verify (2 GiB).
pub const MAX_MEMORY_KIB: u32 = 2 * 1024 * 1024;

/// Largest iteration count accepted from a record on verify.
pub const MAX_ITERATIONS: u32 = 256;

/// Largest degree of parallelism accepted from a record on verify.
pub const MAX_PARALLELISM: u32 = 255;

/// Argon2 marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argon2;

impl sealed::Sealed for Argon2 {}

/// Argon2 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Variant (id, i or d).
    pub variant: Argon2Variant,
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of iterations.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
    /// Output length in bytes.
    pub key_len: usize,
    /// Salt length in bytes.
    pub salt_len: usize,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            variant: Argon2Variant::Id,
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
            key_len: DEFAULT_KEY_LEN,
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl Argon2Params {
    /// Interactive profile: Fast, suitable for interactive logins.
    /// - Memory: 64 MiB
    /// - Iterations: 2
    /// - Parallelism: 1
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            variant: Argon2Variant::Id,
            memory_kib: 64 * 1024,
            iterations: 2,
            parallelism: 1,
            key_len: 32,
            salt_len: 16,
        }
    }

    /// Moderate profile: Balanced security and performance.
    /// - Memory: 256 MiB
    /// - Iterations: 3
    /// - Parallelism: 1
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            variant: Argon2Variant::Id,
            memory_kib: 256 * 1024,
            iterations: 3,
            parallelism: 1,
            key_len: 32,
            salt_len: 16,
        }
    }

    /// Sensitive profile: High security, slower computation.
    /// - Memory: 1 GiB
    /// - Iterations: 4
    /// - Parallelism: 1
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            variant: Argon2Variant::Id,
            memory_kib: 1024 * 1024,
            iterations: 4,
            parallelism: 1,
            key_len: 32,
            salt_len: 16,
        }
    }

    /// Fills every field `config` leaves unset from [`Argon2Params::default`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            variant: config.variant.unwrap_or(defaults.variant),
            memory_kib: config.cost.unwrap_or(defaults.memory_kib),
            iterations: config.rounds.unwrap_or(defaults.iterations),
            parallelism: config.parallelism.unwrap_or(defaults.parallelism),
            key_len: config.key_len.unwrap_or(defaults.key_len),
            salt_len: config.salt_len.unwrap_or(defaults.salt_len),
        }
    }
}

impl PasswordHashAlgorithm for Argon2 {
    const NAME: &'static str = "argon2";
    const ID_PREFIX: &'static str = "argon2";

    type Params = Argon2Params;

    fn params_from_config(config: &Config) -> PhcResult<Self::Params> {
        Ok(Argon2Params::from_config(config))
    }

    fn hash(password: &[u8], params: &Self::Params) -> PhcResult<PhcFields> {
        ensure_password(password)?;

        let salt = random_bytes(params.salt_len)?;
        let mut digest = vec![0u8; params.key_len];
        derive(
            params.variant,
            Version::V0x13,
            password,
            &salt,
            params.memory_kib,
            params.iterations,
            params.parallelism,
            &mut digest,
        )?;

        Ok(PhcFields::new(format!("{}{}", Self::ID_PREFIX, params.variant.suffix()))
            .with_version(ARGON2_VERSION)
            .with_param("m", params.memory_kib)
            .with_param("t", params.iterations)
            .with_param("p", params.parallelism)
            .with_salt(salt)
            .with_hash(digest))
    }

    fn verify(fields: &PhcFields, password: &[u8]) -> PhcResult<bool> {
        ensure_password(password)?;
        ensure_id::<Self>(fields)?;

        let variant = Argon2Variant::from_suffix(&fields.id[Self::ID_PREFIX.len()..])
            .ok_or_else(|| PhcError::UnknownAlgorithm(fields.id.clone()))?;

        let version = match fields.version {
            0x10 => Version::V0x10,
            0x13 => Version::V0x13,
            other => return Err(PhcError::InvalidVersion(other.to_string())),
        };

        let memory_kib = ensure_at_most("m", fields.param_as::<u32>("m")?, MAX_MEMORY_KIB)?;
        let iterations = ensure_at_most("t", fields.param_as::<u32>("t")?, MAX_ITERATIONS)?;
        let parallelism = ensure_at_most("p", fields.param_as::<u32>("p")?, MAX_PARALLELISM)?;

        let mut computed = Zeroizing::new(vec![0u8; fields.hash.len()]);
        derive(
            variant,
            version,
            password,
            &fields.salt,
            memory_kib,
            iterations,
            parallelism,
            &mut computed,
        )?;

        Ok(digests_match(&computed, &fields.hash))
    }
}

#[allow(clippy::too_many_arguments)]
fn derive(
    variant: Argon2Variant,
    version: Version,
    password: &[u8],
    salt: &[u8],
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
    output: &mut [u8],
) -> PhcResult<()> {
    let algorithm = match variant {
        Argon2Variant::Id => Algorithm::Argon2id,
        Argon2Variant::I => Algorithm::Argon2i,
        Argon2Variant::D => Algorithm::Argon2d,
    };

    let params = ParamsBuilder::new()
        .m_cost(memory_kib)
        .t_cost(iterations)
        .p_cost(parallelism)
        .output_len(output.len())
        .build()
        .map_err(|_| PhcError::KeyDerivationFailed)?;

    argon2::Argon2::new(algorithm, version, params)
        .hash_password_into(password, salt, output)
        .map_err(|_| PhcError::KeyDerivationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{deserialize, serialize};

    // Use minimal params for fast tests
    fn test_params() -> Argon2Params {
        Argon2Params {
            variant: Argon2Variant::Id,
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
            key_len: 32,
            salt_len: 16,
        }
    }

    #[test]
    fn test_hash_record_shape() -> PhcResult<()> {
        let fields = Argon2::hash(b"hunter2", &test_params())?;
        assert_eq!(fields.id, "argon2id");
        assert_eq!(fields.version, 19);
        assert_eq!(fields.param_as::<u32>("m")?, 64);
        assert_eq!(fields.param_as::<u32>("t")?, 1);
        assert_eq!(fields.param_as::<u32>("p")?, 1);
        assert_eq!(fields.salt.len(), 16);
        assert_eq!(fields.hash.len(), 32);
        Ok(())
    }

    #[test]
    fn test_hash_verify_roundtrip_through_string() -> PhcResult<()> {
        let fields = Argon2::hash(b"hunter2", &test_params())?;
        let parsed = deserialize(&serialize(&fields))?;
        assert!(Argon2::verify(&parsed, b"hunter2")?);
        assert!(!Argon2::verify(&parsed, b"hunter3")?);
        Ok(())
    }

    #[test]
    fn test_all_variants() -> PhcResult<()> {
        for (variant, id) in [
            (Argon2Variant::Id, "argon2id"),
            (Argon2Variant::I, "argon2i"),
            (Argon2Variant::D, "argon2d"),
        ] {
            let params = Argon2Params {
                variant,
                ..test_params()
            };
            let fields = Argon2::hash(b"hunter2", &params)?;
            assert_eq!(fields.id, id);
            assert!(Argon2::verify(&fields, b"hunter2")?);
        }
        Ok(())
    }

    #[test]
    fn test_salts_are_fresh() -> PhcResult<()> {
        let a = Argon2::hash(b"hunter2", &test_params())?;
        let b = Argon2::hash(b"hunter2", &test_params())?;
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
        Ok(())
    }

    #[test]
    fn test_verify_modified_hash() -> PhcResult<()> {
        let mut fields = Argon2::hash(b"hunter2", &test_params())?;
        fields.hash[0] ^= 0xff;
        assert!(!Argon2::verify(&fields, b"hunter2")?);
        Ok(())
    }

    #[test]
    fn test_verify_version_0x10() -> PhcResult<()> {
        let salt = [7u8; 16];
        let mut digest = [0u8; 32];
        derive(
            Argon2Variant::I,
            Version::V0x10,
            b"hunter2",
            &salt,
            64,
            1,
            1,
            &mut digest,
        )?;
        let fields = PhcFields::new("argon2i")
            .with_version(0x10)
            .with_param("m", 64u32)
            .with_param("t", 1u32)
            .with_param("p", 1u32)
            .with_salt(salt.to_vec())
            .with_hash(digest.to_vec());
        assert!(Argon2::verify(&fields, b"hunter2")?);
        Ok(())
    }

    #[test]
    fn test_verify_wrong_algorithm() {
        let fields = PhcFields::new("scrypt").with_hash(vec![0u8; 32]);
        let result = Argon2::verify(&fields, b"hunter2");
        assert!(matches!(result, Err(PhcError::UnknownAlgorithm(id)) if id == "scrypt"));
    }

    #[test]
    fn test_verify_unknown_variant() {
        let fields = PhcFields::new("argon2x").with_version(19);
        let result = Argon2::verify(&fields, b"hunter2");
        assert!(matches!(result, Err(PhcError::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_verify_unsupported_version() {
        let fields = PhcFields::new("argon2id")
            .with_version(2)
            .with_param("m", 64u32)
            .with_param("t", 1u32)
            .with_param("p", 1u32);
        let result = Argon2::verify(&fields, b"hunter2");
        assert!(matches!(result, Err(PhcError::InvalidVersion(v)) if v == "2"));
    }

    #[test]
    fn test_verify_missing_param() {
        let fields = PhcFields::new("argon2id")
            .with_version(19)
            .with_param("m", 64u32)
            .with_param("p", 1u32);
        let result = Argon2::verify(&fields, b"hunter2");
        assert!(matches!(result, Err(PhcError::MissingParameter(k)) if k == "t"));
    }

    #[test]
    fn test_verify_rejected_params() {
        // m below 8 * p is refused by the KDF
        let fields = PhcFields::new("argon2id")
            .with_version(19)
            .with_param("m", 1u32)
            .with_param("t", 1u32)
            .with_param("p", 1u32)
            .with_salt(vec![0u8; 16])
            .with_hash(vec![0u8; 32]);
        let result = Argon2::verify(&fields, b"hunter2");
        assert!(matches!(result, Err(PhcError::KeyDerivationFailed)));
    }

    #[test]
    fn test_verify_oversized_costs() {
        for (m, t, p, key) in [
            (u32::MAX, 1, 1, "m"),
            (MAX_MEMORY_KIB + 1, 1, 1, "m"),
            (64, u32::MAX, 1, "t"),
            (64, 1, MAX_PARALLELISM + 1, "p"),
        ] {
            let fields = PhcFields::new("argon2id")
                .with_version(19)
                .with_param("m", m)
                .with_param("t", t)
                .with_param("p", p)
                .with_salt(vec![0u8; 16])
                .with_hash(vec![0u8; 32]);
            let result = Argon2::verify(&fields, b"password");
            assert!(
                matches!(&result, Err(PhcError::InvalidParameter(k)) if k == key),
                "m={m} t={t} p={p}: {result:?}"
            );
        }
    }

    #[test]
    fn test_empty_password() {
        let result = Argon2::hash(b"", &test_params());
        assert!(matches!(result, Err(PhcError::EmptyPassword)));
    }

    #[test]
    fn test_params_from_config() {
        let params = Argon2Params::from_config(&Config::new());
        assert_eq!(params, Argon2Params::default());
        assert_eq!(params.memory_kib, 64 * 1024);
        assert_eq!(params.iterations, 16);
        assert_eq!(params.parallelism, 4);
        assert_eq!(params.key_len, 64);
        assert_eq!(params.salt_len, 32);

        let config = Config::new()
            .cost(1024)
            .rounds(2)
            .parallelism(1)
            .key_len(16)
            .variant(Argon2Variant::I);
        let params = Argon2Params::from_config(&config);
        assert_eq!(params.memory_kib, 1024);
        assert_eq!(params.iterations, 2);
        assert_eq!(params.parallelism, 1);
        assert_eq!(params.key_len, 16);
        assert_eq!(params.salt_len, 32);
        assert_eq!(params.variant, Argon2Variant::I);
    }

    #[test]
    fn test_argon2_params_presets() {
        let interactive = Argon2Params::interactive();
        assert_eq!(interactive.memory_kib, 64 * 1024);
        assert_eq!(interactive.iterations, 2);
        assert_eq!(interactive.parallelism, 1);

        let moderate = Argon2Params::moderate();
        assert_eq!(moderate.memory_kib, 256 * 1024);
        assert_eq!(moderate.iterations, 3);
        assert_eq!(moderate.parallelism, 1);

        let sensitive = Argon2Params::sensitive();
        assert_eq!(sensitive.memory_kib, 1024 * 1024);
        assert_eq!(sensitive.iterations, 4);
        assert_eq!(sensitive.parallelism, 1);
    }
}
