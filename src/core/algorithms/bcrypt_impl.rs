//! bcrypt hashing.
//!
//! bcrypt already has its own modular-crypt encoding (`$2b$10$...`). The PHC
//! record keeps that string intact in the hash segment and mirrors the cost
//! as the `r` parameter; the salt segment stays empty because the salt lives
//! inside the embedded string.

use super::{ensure_password, random_bytes};
use crate::core::algorithm::{ensure_id, sealed, PasswordHashAlgorithm};
use crate::core::config::Config;
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

/// Default bcrypt cost.
pub const DEFAULT_COST: u32 = 10;

/// bcrypt salt size in bytes.
const BCRYPT_SALT_SIZE: usize = 16;

/// bcrypt marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bcrypt;

impl sealed::Sealed for Bcrypt {}

/// bcrypt parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptParams {
    /// Cost factor (log2 of the round count), 4 to 31.
    pub cost: u32,
}

impl Default for BcryptParams {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptParams {
    /// Takes the cost from `config.rounds`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            cost: config.rounds.unwrap_or(DEFAULT_COST),
        }
    }
}

impl PasswordHashAlgorithm for Bcrypt {
    const NAME: &'static str = "bcrypt";
    const ID_PREFIX: &'static str = "bcrypt";

    type Params = BcryptParams;

    fn params_from_config(config: &Config) -> PhcResult<Self::Params> {
        Ok(BcryptParams::from_config(config))
    }

    fn hash(password: &[u8], params: &Self::Params) -> PhcResult<PhcFields> {
        ensure_password(password)?;

        let mut salt = [0u8; BCRYPT_SALT_SIZE];
        salt.copy_from_slice(&random_bytes(BCRYPT_SALT_SIZE)?);

        let parts = bcrypt::hash_with_salt(password, params.cost, salt)
            .map_err(|_| PhcError::KeyDerivationFailed)?;
        let encoded = parts.format_for_version(bcrypt::Version::TwoB);

        Ok(PhcFields::new(Self::ID_PREFIX)
            .with_param("r", params.cost)
            .with_hash(encoded.into_bytes()))
    }

    fn verify(fields: &PhcFields, password: &[u8]) -> PhcResult<bool> {
        ensure_password(password)?;
        ensure_id::<Self>(fields)?;

        let cost = fields.param_as::<u32>("r")?;
        let encoded =
            core::str::from_utf8(&fields.hash).map_err(|_| PhcError::KeyDerivationFailed)?;

        // The embedded string carries its own cost; both must agree.
        if embedded_cost(encoded) != Some(cost) {
            return Err(PhcError::InvalidParameter("r".to_owned()));
        }

        bcrypt::verify(password, encoded).map_err(|_| PhcError::KeyDerivationFailed)
    }
}

/// Reads the cost out of a `$2b$NN$...` string.
fn embedded_cost(encoded: &str) -> Option<u32> {
    encoded.split('$').nth(2)?.parse().ok()
}
