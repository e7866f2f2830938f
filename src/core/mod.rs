//! Core PHC types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`fields`] - The decoded record ([`PhcFields`]) and parameter values
//! - [`codec`] - PHC string serialization and parsing
//! - [`error`] - Error types
//! - [`config`] - Algorithm-agnostic overrides and their enums
//! - [`algorithm`] - The sealed algorithm trait and the runtime selector
//! - [`algorithms`] - One implementation per supported algorithm
//! - [`hasher`] - The string-in, string-out facade

pub mod algorithm;
pub mod algorithms;
pub mod codec;
pub mod config;
pub mod error;
pub mod fields;
pub mod hasher;

// Re-export commonly used items
pub use algorithm::{Algorithm, PasswordHashAlgorithm};
pub use codec::{deserialize, serialize};
pub use config::{Argon2Variant, Config, HashFunction};
pub use error::{PhcError, PhcResult};
pub use fields::{ParamValue, PhcFields};
pub use hasher::{verify_any, Hasher};
