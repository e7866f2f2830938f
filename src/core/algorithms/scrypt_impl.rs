//! scrypt hashing.
//!
//! Records look like `$scrypt$v=0$ln=15,p=1,r=8$<salt>$<hash>`, where `ln`
//! is log2 of the CPU/memory cost N.

use zeroize::Zeroizing;

use super::{digests_match, ensure_at_most, ensure_password, random_bytes};
use crate::core::algorithm::{ensure_id, sealed, PasswordHashAlgorithm};
use crate::core::config::Config;
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

/// Default log2 of N (N = 32768).
pub const DEFAULT_LOG_N: u8 = 15;

/// Default block size.
pub const DEFAULT_BLOCK_SIZE: u32 = 8;

/// Default parallelism.
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Default output length in bytes.
pub const DEFAULT_KEY_LEN: usize = 32;

/// Default salt length in bytes.
pub const DEFAULT_SALT_LEN: usize = 16;

/// Largest `ln` accepted from a record on verify.
pub const MAX_LOG_N: u8 = 24;

/// Largest block size accepted from a record on verify.
pub const MAX_BLOCK_SIZE: u32 = 64;

/// Largest parallelism accepted from a record on verify.
pub const MAX_PARALLELISM: u32 = 16;

/// Largest working set (`128 * r * N` bytes) accepted from a record on
/// verify (2 GiB).
pub const MAX_MEMORY_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// scrypt marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scrypt;

impl sealed::Sealed for Scrypt {}

/// scrypt parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptParams {
    /// log2 of the CPU/memory cost N.
    pub ln: u8,
    /// Block size.
    pub r: u32,
    /// Parallelism.
    pub p: u32,
    /// Output length in bytes.
    pub key_len: usize,
    /// Salt length in bytes.
    pub salt_len: usize,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            ln: DEFAULT_LOG_N,
            r: DEFAULT_BLOCK_SIZE,
            p: DEFAULT_PARALLELISM,
            key_len: DEFAULT_KEY_LEN,
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl ScryptParams {
    /// Fills every field `config` leaves unset from [`ScryptParams::default`].
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameter` if `config.cost` does not fit
    /// in a `u8`.
    pub fn from_config(config: &Config) -> PhcResult<Self> {
        let defaults = Self::default();
        let ln = match config.cost {
            Some(cost) => {
                u8::try_from(cost).map_err(|_| PhcError::InvalidParameter("cost".to_owned()))?
            }
            None => defaults.ln,
        };

        Ok(Self {
            ln,
            r: config.rounds.unwrap_or(defaults.r),
            p: config.parallelism.unwrap_or(defaults.p),
            key_len: config.key_len.unwrap_or(defaults.key_len),
            salt_len: config.salt_len.unwrap_or(defaults.salt_len),
        })
    }
}

impl PasswordHashAlgorithm for Scrypt {
    const NAME: &'static str = "scrypt";
    const ID_PREFIX: &'static str = "scrypt";

    type Params = ScryptParams;

    fn params_from_config(config: &Config) -> PhcResult<Self::Params> {
        ScryptParams::from_config(config)
    }

    fn hash(password: &[u8], params: &Self::Params) -> PhcResult<PhcFields> {
        ensure_password(password)?;

        let salt = random_bytes(params.salt_len)?;
        let mut digest = vec![0u8; params.key_len];
        derive(password, &salt, params.ln, params.r, params.p, &mut digest)?;

        Ok(PhcFields::new(Self::ID_PREFIX)
            .with_param("ln", params.ln)
            .with_param("r", params.r)
            .with_param("p", params.p)
            .with_salt(salt)
            .with_hash(digest))
    }

    fn verify(fields: &PhcFields, password: &[u8]) -> PhcResult<bool> {
        ensure_password(password)?;
        ensure_id::<Self>(fields)?;

        let ln = ensure_at_most("ln", fields.param_as::<u8>("ln")?, MAX_LOG_N)?;
        let r = ensure_at_most("r", fields.param_as::<u32>("r")?, MAX_BLOCK_SIZE)?;
        let p = ensure_at_most("p", fields.param_as::<u32>("p")?, MAX_PARALLELISM)?;
        ensure_at_most("ln", (128 * u64::from(r)) << ln, MAX_MEMORY_BYTES)?;

        let mut computed = Zeroizing::new(vec![0u8; fields.hash.len()]);
        derive(password, &fields.salt, ln, r, p, &mut computed)?;

        Ok(digests_match(&computed, &fields.hash))
    }
}

fn derive(
    password: &[u8],
    salt: &[u8],
    ln: u8,
    r: u32,
    p: u32,
    output: &mut [u8],
) -> PhcResult<()> {
    if output.is_empty() {
        return Err(PhcError::KeyDerivationFailed);
    }

    // The length baked into `Params` is only used for its own PHC output;
    // `scrypt::scrypt` derives `output.len()` bytes regardless.
    let params = scrypt::Params::new(ln, r, p, scrypt::Params::RECOMMENDED_LEN)
        .map_err(|_| PhcError::KeyDerivationFailed)?;
    scrypt::scrypt(password, salt, &params, output).map_err(|_| PhcError::KeyDerivationFailed)
}
