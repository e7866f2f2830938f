//! XChaCha20-Poly1305 password encryption.
//!
//! Unlike the other algorithms this one is reversible. Hashing draws a
//! random 256-bit key, stores it as the salt, and encrypts the password;
//! the hash segment is `nonce || ciphertext || tag`. Anyone holding the
//! record can recover the password with [`ChaCha20Poly1305::decrypt`].

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use zeroize::Zeroizing;

use super::{digests_match, ensure_password, random_bytes};
use crate::core::algorithm::{ensure_id, sealed, PasswordHashAlgorithm};
use crate::core::config::Config;
use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::PhcFields;

/// Key size in bytes.
pub const CHACHA20_KEY_SIZE: usize = 32;

/// Extended nonce size in bytes.
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// Poly1305 tag size in bytes.
const POLY1305_TAG_SIZE: usize = 16;

/// XChaCha20-Poly1305 marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChaCha20Poly1305;

impl sealed::Sealed for ChaCha20Poly1305 {}

impl ChaCha20Poly1305 {
    /// Recovers the password stored in a record.
    ///
    /// # Errors
    ///
    /// - `PhcError::UnknownAlgorithm` if the record is not `chacha20poly1305`
    /// - `PhcError::InvalidParameter` if the stored key is not 32 bytes
    /// - `PhcError::DecryptionFailed` if the hash is truncated or the tag
    ///   does not verify
    pub fn decrypt(fields: &PhcFields) -> PhcResult<Zeroizing<Vec<u8>>> {
        ensure_id::<Self>(fields)?;

        if fields.salt.len() != CHACHA20_KEY_SIZE {
            return Err(PhcError::InvalidParameter("key".to_owned()));
        }
        if fields.hash.len() < XCHACHA20_NONCE_SIZE + POLY1305_TAG_SIZE {
            return Err(PhcError::DecryptionFailed);
        }

        let cipher = XChaCha20Poly1305::new_from_slice(&fields.salt)
            .map_err(|_| PhcError::CryptoError)?;
        let (nonce, ciphertext) = fields.hash.split_at(XCHACHA20_NONCE_SIZE);

        cipher
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map(Zeroizing::new)
            .map_err(|_| PhcError::DecryptionFailed)
    }
}

impl PasswordHashAlgorithm for ChaCha20Poly1305 {
    const NAME: &'static str = "chacha20poly1305";
    const ID_PREFIX: &'static str = "chacha20poly1305";

    type Params = ();

    fn params_from_config(_config: &Config) -> PhcResult<Self::Params> {
        Ok(())
    }

    fn hash(password: &[u8], _params: &Self::Params) -> PhcResult<PhcFields> {
        ensure_password(password)?;

        let key = random_bytes(CHACHA20_KEY_SIZE)?;
        let nonce = random_bytes(XCHACHA20_NONCE_SIZE)?;

        let cipher =
            XChaCha20Poly1305::new_from_slice(&key).map_err(|_| PhcError::CryptoError)?;
        let ciphertext = cipher
            .encrypt(XNonce::from_slice(&nonce), password)
            .map_err(|_| PhcError::CryptoError)?;

        let mut output = nonce;
        output.extend_from_slice(&ciphertext);

        Ok(PhcFields::new(Self::ID_PREFIX)
            .with_salt(key)
            .with_hash(output))
    }

    fn verify(fields: &PhcFields, password: &[u8]) -> PhcResult<bool> {
        ensure_password(password)?;

        let plaintext = Self::decrypt(fields)?;
        Ok(digests_match(&plaintext, password))
    }
}
