//! Ergonomic layer for password hashing.
//!
//! The prelude re-exports the public types together with fluent builders
//! and parameter presets.
//!
//! # Usage
//!
//! ```rust
//! use phc_crypto::prelude::*;
//! ```

mod builders;

#[cfg(feature = "argon2")]
pub use builders::Argon2Builder;
#[cfg(feature = "pbkdf2")]
pub use builders::Pbkdf2Builder;
#[cfg(feature = "scrypt")]
pub use builders::ScryptBuilder;

pub use crate::core::algorithm::{Algorithm, PasswordHashAlgorithm};
pub use crate::core::codec::{deserialize, serialize};
pub use crate::core::config::{Argon2Variant, Config, HashFunction};
pub use crate::core::error::{PhcError, PhcResult};
pub use crate::core::fields::{ParamValue, PhcFields};
pub use crate::core::hasher::{verify_any, Hasher};

#[cfg(feature = "argon2")]
pub use crate::core::algorithms::{Argon2, Argon2Params};
#[cfg(feature = "bcrypt")]
pub use crate::core::algorithms::{Bcrypt, BcryptParams};
#[cfg(feature = "chacha20poly1305")]
pub use crate::core::algorithms::ChaCha20Poly1305;
#[cfg(feature = "pbkdf2")]
pub use crate::core::algorithms::{Pbkdf2, Pbkdf2Params};
#[cfg(feature = "scrypt")]
pub use crate::core::algorithms::{Scrypt, ScryptParams};
