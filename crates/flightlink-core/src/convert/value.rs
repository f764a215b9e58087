use std::fmt;

use serde::{Deserialize, Serialize};

use super::table::Unit;
use crate::protocol::frame::FieldId;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Engineering value of one field, or an explicit marker when the raw value
/// is outside the declared domain.
///
/// # Examples
/// ```
/// use flightlink_core::{DecodedValue, FieldId, to_engineering_value};
///
/// let value = to_engineering_value(FieldId::KnobSpeed, 251);
/// assert_eq!(value, DecodedValue::Unknown { raw: 251 });
/// assert_eq!(value.label(), "Unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DecodedValue {
    Value { value: f64, unit: Unit, label: String },
    Unknown { raw: u32 },
}

impl DecodedValue {
    pub fn is_unknown(&self) -> bool {
        matches!(self, DecodedValue::Unknown { .. })
    }

    /// Numeric value; enumerations report their index.
    pub fn value(&self) -> Option<f64> {
        match self {
            DecodedValue::Value { value, .. } => Some(*value),
            DecodedValue::Unknown { .. } => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DecodedValue::Value { label, .. } => label,
            DecodedValue::Unknown { .. } => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One converted field of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReading {
    pub field: FieldId,
    pub raw: u32,
    pub decoded: DecodedValue,
}
