//! Calculation result values.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text shown for a result whose operands are missing.
pub const UNAVAILABLE: &str = "N/A";

/// Result of a derivation or custom query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Computed {
    Integer(i64),
    Real(f64),
    /// An operand was missing or held zero.
    Unavailable,
}

impl Computed {
    pub fn is_available(&self) -> bool {
        !matches!(self, Computed::Unavailable)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Computed::Integer(v) => Some(v as f64),
            Computed::Real(v) => Some(v),
            Computed::Unavailable => None,
        }
    }
}

impl fmt::Display for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Computed::Integer(v) => write!(f, "{v}"),
            Computed::Real(v) if v.is_nan() => f.write_str("NaN"),
            Computed::Real(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Computed::Real(v) if v == 0.0 => f.write_str("0"),
            Computed::Real(v) => write!(f, "{v}"),
            Computed::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl Serialize for Computed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Computed::Integer(v) => serializer.serialize_i64(v),
            Computed::Real(v) => serializer.serialize_f64(v),
            Computed::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}
