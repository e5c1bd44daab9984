//! Semantic and raw attribute values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value as the host sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(u64),
}

impl FieldValue {
    /// Numeric view used for domain checks (`true` is 1)
    #[must_use]
    pub fn as_u64(self) -> u64 {
        match self {
            FieldValue::Bool(b) => u64::from(b),
            FieldValue::Number(n) => n,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Number(u64::from(value))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// An attribute value as delivered by the transport's ZCL decoder
///
/// Devices with buggy firmware may report values of the wrong shape, so
/// anything JSON can carry is accepted here and normalized per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Null, arrays and objects
    Other(serde_json::Value),
}

impl RawValue {
    /// Truthiness of the raw value, `None` when it has no sensible reading
    #[must_use]
    pub fn truthy(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            RawValue::Int(n) => Some(*n != 0),
            RawValue::Float(f) if f.is_nan() => None,
            RawValue::Float(f) => Some(*f != 0.0),
            RawValue::Text(_) | RawValue::Other(_) => None,
        }
    }

    /// Integer reading saturated into `0..=max`, `None` when not numeric
    #[must_use]
    pub fn saturating_uint(&self, max: u16) -> Option<u16> {
        let n = match self {
            RawValue::Bool(b) => i64::from(*b),
            RawValue::Int(n) => *n,
            RawValue::Float(f) if f.is_finite() => f.round() as i64,
            RawValue::Float(_) | RawValue::Text(_) | RawValue::Other(_) => return None,
        };
        Some(n.clamp(0, i64::from(max)) as u16)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_uint() {
        assert_eq!(RawValue::Int(300).saturating_uint(255), Some(255));
        assert_eq!(RawValue::Int(-4).saturating_uint(255), Some(0));
        assert_eq!(RawValue::Float(12.6).saturating_uint(255), Some(13));
        assert_eq!(RawValue::Bool(true).saturating_uint(255), Some(1));
        assert_eq!(RawValue::Float(f64::NAN).saturating_uint(255), None);
        assert_eq!(RawValue::Text("9".into()).saturating_uint(255), None);
    }

    #[test]
    fn test_truthy() {
        assert_eq!(RawValue::Int(5).truthy(), Some(true));
        assert_eq!(RawValue::Int(0).truthy(), Some(false));
        assert_eq!(RawValue::Float(0.0).truthy(), Some(false));
        assert_eq!(RawValue::Text("on".into()).truthy(), None);
    }

    #[test]
    fn test_raw_value_from_json() {
        let values: Vec<RawValue> =
            serde_json::from_str(r#"[true, 7, 1.5, "x", null, [1, 2]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawValue::Bool(true),
                RawValue::Int(7),
                RawValue::Float(1.5),
                RawValue::Text("x".into()),
                RawValue::Other(serde_json::Value::Null),
                RawValue::Other(serde_json::json!([1, 2])),
            ]
        );
    }

    #[test]
    fn test_shapeless_values_have_no_reading() {
        let null = RawValue::Other(serde_json::Value::Null);
        assert_eq!(null.truthy(), None);
        assert_eq!(null.saturating_uint(255), None);
        let object = RawValue::Other(serde_json::json!({"value": 3}));
        assert_eq!(object.saturating_uint(u16::MAX), None);
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&FieldValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&FieldValue::Number(30)).unwrap(), "30");
    }
}
