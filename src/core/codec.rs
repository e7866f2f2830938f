//! PHC string serialization and parsing.
//!
//! PHC strings follow the format:
//!
//! ```text
//! $<id>$v=<version>$<key>=<value>(,<key>=<value>)*$<salt>$<hash>
//! ```
//!
//! Salt and hash are encoded with the standard base64 alphabet without
//! padding. The alphabet is fixed: a record written with any other
//! transform will not decode.

use core::fmt::{self, Display};
use core::str::FromStr;
use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use crate::core::error::{PhcError, PhcResult};
use crate::core::fields::{ParamValue, PhcFields};

/// Segment delimiter.
pub const DELIMITER: char = '$';

/// Separator between parameter tokens.
pub const PARAM_SEPARATOR: char = ',';

/// Separator between a parameter key and its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Prefix of the version segment.
pub const VERSION_PREFIX: &str = "v=";

/// Number of segments in a complete record (the leading one is empty).
pub const SEGMENT_COUNT: usize = 6;

/// The positional segments of a PHC string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Algorithm identifier.
    Id,
    /// `v=<version>`.
    Version,
    /// Comma-separated parameters.
    Params,
    /// Base64 salt.
    Salt,
    /// Base64 hash.
    Hash,
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Version => "version",
            Self::Params => "params",
            Self::Salt => "salt",
            Self::Hash => "hash",
        };
        f.write_str(name)
    }
}

/// Serializes `fields` into a PHC string.
///
/// This never fails and performs no validation: an `id` or parameter
/// containing a delimiter produces a string that will not parse back.
#[must_use]
pub fn serialize(fields: &PhcFields) -> String {
    fields.to_string()
}

/// Parses a PHC string into its fields.
///
/// Parameter values are returned as [`ParamValue::Str`]; reading them as
/// numbers is up to the caller (see [`PhcFields::param_as`]).
///
/// # Errors
///
/// - `PhcError::MalformedInput` if the string does not have exactly six
///   segments, the leading segment is not empty, or the id is empty
/// - `PhcError::InvalidVersion` if the version segment is not `v=<u32>`
/// - `PhcError::InvalidParameter` for a token without `=`, an empty key,
///   or a repeated key
/// - `PhcError::InvalidEncoding` if salt or hash is not unpadded base64
pub fn deserialize(phc: &str) -> PhcResult<PhcFields> {
    let parts: Vec<&str> = phc.split(DELIMITER).collect();

    if parts.len() != SEGMENT_COUNT || !parts[0].is_empty() {
        return Err(PhcError::MalformedInput {
            segments: parts.len(),
        });
    }

    let id = parts[1];
    if id.is_empty() {
        return Err(PhcError::MalformedInput {
            segments: parts.len(),
        });
    }

    let version = parse_version(parts[2])?;
    let params = parse_params(parts[3])?;
    let salt = decode_binary(parts[4], Segment::Salt)?;
    let hash = decode_binary(parts[5], Segment::Hash)?;

    Ok(PhcFields {
        id: id.to_owned(),
        version,
        params,
        salt,
        hash,
    })
}

/// Parses `v=<decimal>`. An empty segment means the record has no version.
fn parse_version(segment: &str) -> PhcResult<u32> {
    if segment.is_empty() {
        return Ok(0);
    }

    segment
        .strip_prefix(VERSION_PREFIX)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| PhcError::InvalidVersion(segment.to_owned()))
}

fn parse_params(segment: &str) -> PhcResult<BTreeMap<String, ParamValue>> {
    let mut params = BTreeMap::new();

    if segment.is_empty() {
        return Ok(params);
    }

    for token in segment.split(PARAM_SEPARATOR) {
        let (key, value) = token
            .split_once(KEY_VALUE_SEPARATOR)
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| PhcError::InvalidParameter(token.to_owned()))?;

        if params
            .insert(key.to_owned(), ParamValue::Str(value.to_owned()))
            .is_some()
        {
            return Err(PhcError::InvalidParameter(key.to_owned()));
        }
    }

    Ok(params)
}

fn decode_binary(segment: &str, which: Segment) -> PhcResult<Vec<u8>> {
    STANDARD_NO_PAD
        .decode(segment)
        .map_err(|source| PhcError::InvalidEncoding {
            segment: which,
            source,
        })
}

// =============================================================================
// Display (serialization to PHC string)
// =============================================================================

impl Display for PhcFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DELIMITER}{}{DELIMITER}{VERSION_PREFIX}{}{DELIMITER}",
            self.id, self.version
        )?;

        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, "{PARAM_SEPARATOR}")?;
            }
            // Both variants are rendered; nothing is dropped.
            match value {
                ParamValue::Str(s) => write!(f, "{key}{KEY_VALUE_SEPARATOR}{s}")?,
                ParamValue::Int(n) => write!(f, "{key}{KEY_VALUE_SEPARATOR}{n}")?,
            }
        }

        write!(
            f,
            "{DELIMITER}{}{DELIMITER}{}",
            STANDARD_NO_PAD.encode(&self.salt),
            STANDARD_NO_PAD.encode(&self.hash)
        )
    }
}

// =============================================================================
// TryFrom / FromStr (parsing from PHC string)
// =============================================================================

impl TryFrom<&str> for PhcFields {
    type Error = PhcError;

    fn try_from(phc: &str) -> Result<Self, Self::Error> {
        deserialize(phc)
    }
}

impl TryFrom<String> for PhcFields {
    type Error = PhcError;

    fn try_from(phc: String) -> Result<Self, Self::Error> {
        deserialize(phc.as_str())
    }
}

impl FromStr for PhcFields {
    type Err = PhcError;

    fn from_str(phc: &str) -> Result<Self, Self::Err> {
        deserialize(phc)
    }
}
