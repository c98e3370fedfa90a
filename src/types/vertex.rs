//! Canonical vertex identifiers.

use std::borrow::Borrow;

use serde::Serialize;
use serde_json::Value;

use super::error::{DsError, DsResult};
use super::format_number;

/// A vertex in its canonical string form.
///
/// Every conversion into `VertexId` canonicalizes, so `0`, `0.0` and `"0"`
/// all name the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VertexId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VertexId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for VertexId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VertexId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for VertexId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&VertexId> for VertexId {
    fn from(value: &VertexId) -> Self {
        value.clone()
    }
}

impl From<f64> for VertexId {
    fn from(value: f64) -> Self {
        Self(format_number(value))
    }
}

impl From<f32> for VertexId {
    fn from(value: f32) -> Self {
        Self(format_number(value as f64))
    }
}

macro_rules! vertex_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VertexId {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

vertex_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<&Value> for VertexId {
    type Error = DsError;

    /// Numbers and strings only; integers keep their exact digits.
    fn try_from(value: &Value) -> DsResult<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::from(u))
                } else {
                    match n.as_f64() {
                        Some(f) => Ok(Self::from(f)),
                        None => Err(DsError::InvalidVertex(n.to_string())),
                    }
                }
            }
            Value::String(s) => Ok(Self::from(s.as_str())),
            other => Err(DsError::InvalidVertex(other.to_string())),
        }
    }
}
