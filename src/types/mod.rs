//! Shared data types for the dskit library.

pub mod error;
pub mod key;
pub mod vertex;

pub use error::{DsError, DsResult};
pub use key::{IntoKey, Key};
pub use vertex::VertexId;

/// Canonical string form of a number.
///
/// Integral values print without a fractional part or exponent, so `6.0`
/// and `6` share the form `"6"`. Both zeros print as `"0"`.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
