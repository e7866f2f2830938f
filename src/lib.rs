//! PHC string format codec and password hashing.
//!
//! The [PHC string format] is the common text encoding for password hashes:
//!
//! ```text
//! $<id>$v=<version>$<param>=<value>,...$<salt>$<hash>
//! ```
//!
//! Salt and hash are standard base64 without padding. This crate provides a
//! strict codec for that format and a small hashing facade on top of it.
//!
//! [PHC string format]: https://github.com/P-H-C/phc-string-format
//!
//! # Quick Start
//!
//! ```rust
//! use phc_crypto::{deserialize, serialize, PhcFields};
//!
//! let fields = PhcFields::new("argon2id")
//!     .with_version(19)
//!     .with_param("m", 65536)
//!     .with_param("t", 3)
//!     .with_param("p", 1)
//!     .with_salt(b"SaltyText".to_vec())
//!     .with_hash(b"HashyText".to_vec());
//!
//! let phc = serialize(&fields);
//! assert_eq!(phc, "$argon2id$v=19$m=65536,p=1,t=3$U2FsdHlUZXh0$SGFzaHlUZXh0");
//!
//! let parsed = deserialize(&phc).expect("valid PHC string");
//! assert_eq!(parsed.id, "argon2id");
//! assert_eq!(parsed.param_as::<u32>("m").expect("numeric"), 65536);
//! ```
//!
//! # Algorithms
//!
//! | Algorithm | Identifier | Feature |
//! |-----------|------------|---------|
//! | Argon2 | `argon2id`, `argon2i`, `argon2d` | `argon2` |
//! | bcrypt | `bcrypt` | `bcrypt` |
//! | scrypt | `scrypt` | `scrypt` |
//! | PBKDF2 | `pbkdf2sha256`, `pbkdf2sha512`, ... | `pbkdf2` |
//! | XChaCha20-Poly1305 | `chacha20poly1305` | `chacha20poly1305` |
//!
//! All of them are enabled by default. PBKDF2 with SHA-1 or MD5 additionally
//! requires `legacy-digests`.
//!
//! ```rust
//! # #[cfg(feature = "pbkdf2")]
//! # fn main() -> Result<(), phc_crypto::PhcError> {
//! use phc_crypto::{verify_any, Algorithm, Config, Hasher};
//!
//! let hasher = Hasher::new(Algorithm::Pbkdf2, Config::new().rounds(1000));
//! let phc = hasher.hash("correct horse")?;
//!
//! assert!(verify_any(&phc, "correct horse")?);
//! assert!(!verify_any(&phc, "battery staple")?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pbkdf2"))]
//! # fn main() {}
//! ```
//!
//! # Security
//!
//! - Digests are compared in constant time
//! - Salts, keys and nonces come from the OS RNG
//! - Decrypted plaintext is zeroized on drop
//! - No unsafe code
//!
//! `chacha20poly1305` records are reversible: the key is stored
//! in the record. Prefer a KDF for new passwords.
//!
//! # Logging
//!
//! Hash and verify dispatch emit `tracing` events at `debug`, and records
//! rejected for belonging to an unknown or different algorithm emit `warn`.
//! The codec itself never logs. No subscriber is installed.
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::algorithm::{Algorithm, PasswordHashAlgorithm};
pub use core::codec::{deserialize, serialize};
pub use core::config::{Argon2Variant, Config, HashFunction};
pub use core::error::{PhcError, PhcResult};
pub use core::fields::{ParamValue, PhcFields};
pub use core::hasher::{verify_any, Hasher};

// Re-export algorithm markers based on enabled features
#[cfg(feature = "argon2")]
pub use core::algorithms::{Argon2, Argon2Params};
#[cfg(feature = "bcrypt")]
pub use core::algorithms::{Bcrypt, BcryptParams};
#[cfg(feature = "chacha20poly1305")]
pub use core::algorithms::ChaCha20Poly1305;
#[cfg(feature = "pbkdf2")]
pub use core::algorithms::{Pbkdf2, Pbkdf2Params};
#[cfg(feature = "scrypt")]
pub use core::algorithms::{Scrypt, ScryptParams};
