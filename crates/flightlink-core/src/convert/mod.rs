//! Raw-to-engineering conversion.
//!
//! Every field has one entry in `table::FIELD_TRANSFORMS`: a domain maximum,
//! a transform and a unit. Raw values above the domain maximum become
//! `DecodedValue::Unknown`; the formula is never evaluated for them, so an
//! out-of-range field cannot show up as a plausible number. A domain
//! violation only affects its own field.

pub mod table;
mod value;

pub use table::{FIELD_TRANSFORMS, FieldTransform, Transform, Unit, transform_for};
pub use value::{DecodedValue, FieldReading, UNKNOWN_LABEL};

use crate::protocol::frame::{FieldId, FlightControlRecord};

impl FieldTransform {
    pub fn apply(&self, raw: u32) -> DecodedValue {
        if raw > self.domain_max {
            return DecodedValue::Unknown { raw };
        }
        match self.transform {
            Transform::Switch { on, off } => {
                let label = if raw == 1 { on } else { off };
                DecodedValue::Value {
                    value: f64::from(raw),
                    unit: self.unit,
                    label: label.to_string(),
                }
            }
            Transform::Named(labels) => match labels.get(raw as usize) {
                Some(label) => DecodedValue::Value {
                    value: f64::from(raw),
                    unit: self.unit,
                    label: (*label).to_string(),
                },
                None => DecodedValue::Unknown { raw },
            },
            Transform::Linear {
                scale,
                offset,
                precision,
            } => {
                let value = f64::from(raw) * scale + offset;
                DecodedValue::Value {
                    value,
                    unit: self.unit,
                    label: format!("{value:.precision$}{}", self.unit.suffix()),
                }
            }
        }
    }
}

/// Applies the transform table to raw field values.
///
/// # Examples
/// ```
/// use flightlink_core::{FieldId, FlightControlRecord, UnitConverter};
///
/// let record = FlightControlRecord { flap_angle: 40, ..Default::default() };
/// let readings = UnitConverter::new().convert_record(&record);
/// let flap = &readings[FieldId::FlapAngle.index()];
/// assert_eq!(flap.decoded.label(), "40°");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    table: &'static [FieldTransform; FieldId::COUNT],
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitConverter {
    pub fn new() -> Self {
        Self {
            table: &FIELD_TRANSFORMS,
        }
    }

    pub fn convert(&self, field: FieldId, raw: u32) -> DecodedValue {
        self.table[field.index()].apply(raw)
    }

    /// Converts all fields of `record`, in wire order.
    pub fn convert_record(&self, record: &FlightControlRecord) -> Vec<FieldReading> {
        self.table
            .iter()
            .map(|entry| {
                let raw = record.raw(entry.field);
                FieldReading {
                    field: entry.field,
                    raw,
                    decoded: entry.apply(raw),
                }
            })
            .collect()
    }
}

pub fn to_engineering_value(field: FieldId, raw: u32) -> DecodedValue {
    UnitConverter::new().convert(field, raw)
}
