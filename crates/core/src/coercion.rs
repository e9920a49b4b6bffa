//! Normalization of loosely-typed numeric request values.
//!
//! JSON clients send numeric fields as integers, numeric strings or floats
//! depending on how they were produced, and query strings only ever carry
//! strings. [`LooseInt`] accepts all three and [`LooseInt::coerce`] reduces
//! them to a single `i64`.

use serde::Deserialize;

/// Value produced when a string does not parse as a decimal integer.
///
/// Negative, so every range check in the validator rejects it.
pub const INVALID_INT: i64 = -1;

/// A scalar that should be an integer but may arrive as a string or float.
///
/// Other JSON types (bool, array, object) fail deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseInt {
    /// Reduce to a canonical integer.
    ///
    /// - integers pass through
    /// - strings are parsed as decimal integers; failure yields [`INVALID_INT`]
    /// - floats are truncated toward zero, saturating at the `i64` bounds
    pub fn coerce(&self) -> i64 {
        match self {
            Self::Int(value) => *value,
            Self::Float(value) => *value as i64,
            Self::Text(value) => value.parse::<i64>().unwrap_or(INVALID_INT),
        }
    }

    /// [`coerce`](Self::coerce) narrowed to `i32`. Values outside the `i32`
    /// range yield [`INVALID_INT`] instead of wrapping.
    pub fn coerce_i32(&self) -> i32 {
        i32::try_from(self.coerce()).unwrap_or(INVALID_INT as i32)
    }
}

impl From<i64> for LooseInt {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for LooseInt {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Coerce an optional loose value, treating absence as [`INVALID_INT`].
pub fn coerce_or_invalid(value: Option<&LooseInt>) -> i64 {
    value.map_or(INVALID_INT, LooseInt::coerce)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
