//! Priority keys: a closed Number/Text domain with a total order.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use super::error::{DsError, DsResult};
use super::format_number;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum KeyRepr {
    Number(f64),
    Text(String),
}

/// A priority key: either a finite number or a string.
///
/// Numbers order numerically, strings order byte-wise, and every number
/// orders before every string. A `Key` can only be obtained through
/// [`IntoKey`] or the `From`/`TryFrom` conversions below, so non-finite
/// numbers and integers `f64` cannot hold exactly never reach a heap.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Key(KeyRepr);

impl Key {
    /// Build a numeric key, rejecting NaN and infinities.
    pub fn number(value: f64) -> DsResult<Self> {
        if !value.is_finite() {
            return Err(DsError::InvalidKey(format_number(value)));
        }
        // -0.0 and 0.0 must be the same key
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Self(KeyRepr::Number(value)))
    }

    /// Build a string key.
    pub fn text(value: impl Into<String>) -> Self {
        Self(KeyRepr::Text(value.into()))
    }

    /// The numeric value, if this is a number key.
    pub fn as_number(&self) -> Option<f64> {
        match &self.0 {
            KeyRepr::Number(n) => Some(*n),
            KeyRepr::Text(_) => None,
        }
    }

    /// The string value, if this is a text key.
    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            KeyRepr::Number(_) => None,
            KeyRepr::Text(s) => Some(s),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self.0, KeyRepr::Number(_))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (KeyRepr::Number(a), KeyRepr::Number(b)) => a.total_cmp(b),
            (KeyRepr::Text(a), KeyRepr::Text(b)) => a.cmp(b),
            (KeyRepr::Number(_), KeyRepr::Text(_)) => Ordering::Less,
            (KeyRepr::Text(_), KeyRepr::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            KeyRepr::Number(n) => write!(f, "{}", format_number(*n)),
            KeyRepr::Text(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(value: $t) -> Self {
                    Self(KeyRepr::Number(value as f64))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, u8, u16, u32);

macro_rules! key_try_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Key {
                type Error = DsError;

                /// Fails unless `f64` holds the integer exactly.
                fn try_from(value: $t) -> DsResult<Self> {
                    let number = value as f64;
                    // i128 covers both signs without saturating at the bounds
                    if number as i128 != value as i128 {
                        return Err(DsError::InvalidKey(format!(
                            "{} is not exactly representable",
                            value
                        )));
                    }
                    Ok(Self(KeyRepr::Number(number)))
                }
            }

            impl IntoKey for $t {
                fn into_key(self) -> DsResult<Key> {
                    Key::try_from(self)
                }
            }
        )*
    };
}

key_try_from_wide_int!(i64, isize, u64, usize);

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl TryFrom<f64> for Key {
    type Error = DsError;

    fn try_from(value: f64) -> DsResult<Self> {
        Self::number(value)
    }
}

impl TryFrom<&Value> for Key {
    type Error = DsError;

    fn try_from(value: &Value) -> DsResult<Self> {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::number(f),
                None => Err(DsError::InvalidKey(n.to_string())),
            },
            Value::String(s) => Ok(Self::text(s.as_str())),
            other => Err(DsError::InvalidKey(other.to_string())),
        }
    }
}

/// Conversion into a priority key, the single entry point used by
/// `MinPQTable::insert`.
pub trait IntoKey {
    fn into_key(self) -> DsResult<Key>;
}

impl IntoKey for Key {
    fn into_key(self) -> DsResult<Key> {
        Ok(self)
    }
}

impl IntoKey for f64 {
    fn into_key(self) -> DsResult<Key> {
        Key::number(self)
    }
}

impl IntoKey for f32 {
    fn into_key(self) -> DsResult<Key> {
        Key::number(self as f64)
    }
}

impl IntoKey for &Value {
    fn into_key(self) -> DsResult<Key> {
        Key::try_from(self)
    }
}

impl IntoKey for Value {
    fn into_key(self) -> DsResult<Key> {
        Key::try_from(&self)
    }
}

macro_rules! into_key_infallible {
    ($($t:ty),*) => {
        $(
            impl IntoKey for $t {
                fn into_key(self) -> DsResult<Key> {
                    Ok(Key::from(self))
                }
            }
        )*
    };
}

into_key_infallible!(i8, i16, i32, u8, u16, u32, &str, String);
