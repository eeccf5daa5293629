use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque named value attached to a scaffold or molecule by an external
/// property calculator (e.g. an atom count or a fingerprint-derived score).
///
/// The network stores and exports these values verbatim; it never computes,
/// interprets, or orders by them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(value) => write!(f, "{}", value),
            PropertyValue::Real(value) => write!(f, "{}", value),
            PropertyValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Real(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}
