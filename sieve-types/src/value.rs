//! Scalar kinds and the typed values they coerce into.
//!
//! Each kind owns exactly one coercion strategy. There is no open-ended
//! conversion: a string either parses under its kind's rules or the caller
//! gets a [`CoercionError`] naming the kind and the offending input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CoercionError, CoercionResult};

/// The scalar type an attribute declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
}

impl ScalarKind {
    /// Every kind, in declaration order.
    pub const ALL: [ScalarKind; 9] = [
        Self::Bool,
        Self::Char,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Text,
    ];

    /// Returns the lowercase name used in error messages and config.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Text => "text",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Converts an external string representation into a value of this kind.
    ///
    /// - `Bool`: `true` / `false`, ASCII case-insensitive
    /// - integers: decimal with optional sign, range-checked for the width
    /// - floats: locale-invariant decimal or exponent notation, finite only
    /// - `Char`: exactly one character, verbatim
    /// - `Text`: verbatim
    ///
    /// Surrounding whitespace is ignored for bool and numeric kinds only.
    pub fn coerce(&self, raw: &str) -> CoercionResult<TypedValue> {
        match self {
            Self::Bool => parse_bool(raw).map(TypedValue::Bool),
            Self::Char => parse_char(raw).map(TypedValue::Char),
            Self::Int8 => parse_int(*self, raw).map(TypedValue::Int8),
            Self::Int16 => parse_int(*self, raw).map(TypedValue::Int16),
            Self::Int32 => parse_int(*self, raw).map(TypedValue::Int32),
            Self::Int64 => parse_int(*self, raw).map(TypedValue::Int64),
            Self::Float32 => parse_float(*self, raw, f32::is_finite).map(TypedValue::Float32),
            Self::Float64 => parse_float(*self, raw, f64::is_finite).map(TypedValue::Float64),
            Self::Text => Ok(TypedValue::Text(raw.to_owned())),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_bool(raw: &str) -> CoercionResult<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoercionError::new(
            ScalarKind::Bool,
            raw,
            "expected `true` or `false`",
        ))
    }
}

fn parse_char(raw: &str) -> CoercionResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(CoercionError::new(ScalarKind::Char, raw, "empty input")),
        (Some(_), Some(_)) => Err(CoercionError::new(
            ScalarKind::Char,
            raw,
            "expected exactly one character",
        )),
    }
}

fn parse_int<T>(kind: ScalarKind, raw: &str) -> CoercionResult<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| CoercionError::new(kind, raw, e.to_string()))
}

fn parse_float<T>(kind: ScalarKind, raw: &str, is_finite: fn(T) -> bool) -> CoercionResult<T>
where
    T: FromStr<Err = std::num::ParseFloatError> + Copy,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| CoercionError::new(kind, raw, e.to_string()))?;
    if is_finite(value) {
        Ok(value)
    } else {
        // from_str also maps overflow (e.g. "1e39" for f32) to infinity.
        Err(CoercionError::new(kind, raw, "value is not a finite number"))
    }
}

/// A scalar value coerced from its external string form.
///
/// Serializes untagged, so a typed filter renders as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Bool(bool),
    Char(char),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
}

impl TypedValue {
    /// Returns the kind this value was coerced into.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Char(_) => ScalarKind::Char,
            Self::Int8(_) => ScalarKind::Int8,
            Self::Int16(_) => ScalarKind::Int16,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Text(_) => ScalarKind::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Widens any integer value to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(v) => Some(i64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Widens any floating-point value to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(v) => Some(f64::from(*v)),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// Writes the canonical string form. Coercing that form with [`TypedValue::kind`]
/// yields an equal value.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}
