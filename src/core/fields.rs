//! `PhcFields` - the structured form of one PHC record.
//!
//! A record is an algorithm identifier, a version, an unordered set of
//! `key=value` parameters, and two binary fields (salt and hash). See
//! [`crate::core::codec`] for the text form.

use core::fmt::{self, Display};
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::core::error::{PhcError, PhcResult};

/// A single parameter value.
///
/// Parameters are either free-form strings or integers. Values read back
/// from a PHC string are always [`ParamValue::Str`]; numeric interpretation
/// is left to the algorithm reading them (see [`ParamValue::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// A string value, emitted verbatim.
    Str(String),
    /// An integer value, emitted in decimal.
    Int(i64),
}

impl ParamValue {
    /// Returns the string value, if this is a [`ParamValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer value, if this is a [`ParamValue::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Str(_) => None,
            Self::Int(i) => Some(*i),
        }
    }

    /// Interprets the value as `T`, whichever variant holds it.
    ///
    /// # Errors
    ///
    /// Returns `PhcError::InvalidParameter` (carrying the rendered value) if
    /// the value does not parse as `T`.
    pub fn parse<T: FromStr>(&self) -> PhcResult<T> {
        let rendered = self.to_string();
        rendered
            .parse::<T>()
            .map_err(|_| PhcError::InvalidParameter(rendered))
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// The structured contents of a PHC string.
///
/// Format: `$<id>$v=<version>$<k>=<v>,...$<salt>$<hash>`
///
/// Parameters are kept in a sorted map, so two records holding the same
/// pairs compare equal regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use phc_crypto::PhcFields;
///
/// let fields = PhcFields::new("argon2id")
///     .with_version(19)
///     .with_param("m", 65536u32)
///     .with_param("t", 3u32)
///     .with_param("p", 1u32)
///     .with_salt(b"SaltyText".to_vec())
///     .with_hash(b"HashyText".to_vec());
///
/// let encoded = fields.to_string();
/// assert_eq!(encoded, "$argon2id$v=19$m=65536,p=1,t=3$U2FsdHlUZXh0$SGFzaHlUZXh0");
///
/// let decoded = PhcFields::try_from(encoded.as_str()).expect("valid record");
/// assert_eq!(decoded.param_as::<u32>("m").expect("m present"), 65536);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhcFields {
    /// Algorithm identifier (e.g. `argon2id`, `pbkdf2sha256`).
    pub id: String,
    /// Algorithm version; 0 when the record carries none.
    pub version: u32,
    /// Algorithm parameters.
    pub params: BTreeMap<String, ParamValue>,
    /// Raw salt bytes (may be empty).
    pub salt: Vec<u8>,
    /// Raw digest or ciphertext bytes.
    pub hash: Vec<u8>,
}

impl PhcFields {
    /// Creates an empty record for the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the version.
    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Inserts a parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets the salt bytes.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Sets the hash bytes.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<Vec<u8>>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Returns the raw parameter value for `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Reads parameter `key` and interprets it as `T`.
    ///
    /// # Errors
    ///
    /// - `PhcError::MissingParameter` if `key` is absent
    /// - `PhcError::InvalidParameter` if the value does not parse as `T`
    pub fn param_as<T: FromStr>(&self, key: &str) -> PhcResult<T> {
        let value = self
            .params
            .get(key)
            .ok_or_else(|| PhcError::MissingParameter(key.to_owned()))?;
        value
            .parse()
            .map_err(|_| PhcError::InvalidParameter(key.to_owned()))
    }
}
