use serde::{Deserialize, Serialize};

use crate::protocol::frame::FieldId;

const ON_DEFAULT_OFF: Transform = Transform::Switch {
    on: "ON(default)",
    off: "OFF",
};
const ON_OFF: Transform = Transform::Switch {
    on: "ON",
    off: "OFF",
};
const STICK_AXIS: Transform = Transform::Linear {
    scale: 0.01,
    offset: -1.0,
    precision: 2,
};

const FLIGHT_MODES: &[&str] = &["Preprogram(Default)", "WPT Navigation", "Knob", "Manual(CAS)"];

const MODE_ENGAGE_ACTIONS: &[&str] = &[
    "No action(default)",
    "Auto take off(Start preprogrammed mission)",
    "Transition_F2M(Fixed to multi)",
    "Transition_M2F(Multi to fixed)",
    "Jump to waypoint",
    "Return to base(=Auto landing)",
    "Start mission",
    "Hold current position",
    "Mission reschedule",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Enum,
    Degrees,
    KilometersPerHour,
    Meters,
    Unitless,
}

impl Unit {
    /// Text appended to a formatted number.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Degrees => "°",
            Unit::KilometersPerHour => " km/h",
            Unit::Meters => " m",
            Unit::Enum | Unit::Unitless => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// 1 selects `on`, anything else `off`.
    Switch {
        on: &'static str,
        off: &'static str,
    },
    /// Raw value indexes the label list.
    Named(&'static [&'static str]),
    /// `raw * scale + offset`, printed with `precision` decimals.
    Linear {
        scale: f64,
        offset: f64,
        precision: usize,
    },
}

/// Domain, formula and unit of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTransform {
    pub field: FieldId,
    /// Largest raw value with a defined meaning.
    pub domain_max: u32,
    pub transform: Transform,
    pub unit: Unit,
}

impl FieldTransform {
    const fn new(field: FieldId, domain_max: u32, transform: Transform, unit: Unit) -> Self {
        Self {
            field,
            domain_max,
            transform,
            unit,
        }
    }

    const fn linear(
        field: FieldId,
        domain_max: u32,
        scale: f64,
        offset: f64,
        precision: usize,
        unit: Unit,
    ) -> Self {
        Self::new(
            field,
            domain_max,
            Transform::Linear {
                scale,
                offset,
                precision,
            },
            unit,
        )
    }
}

/// Transform of every field, indexed by `FieldId::index`.
pub static FIELD_TRANSFORMS: [FieldTransform; FieldId::COUNT] = [
    FieldTransform::new(FieldId::ModeOverride, 1, ON_DEFAULT_OFF, Unit::Enum),
    FieldTransform::new(FieldId::FlightMode, 3, Transform::Named(FLIGHT_MODES), Unit::Enum),
    FieldTransform::new(
        FieldId::ModeEngage,
        8,
        Transform::Named(MODE_ENGAGE_ACTIONS),
        Unit::Enum,
    ),
    FieldTransform::new(FieldId::FlapOverride, 1, ON_DEFAULT_OFF, Unit::Enum),
    FieldTransform::linear(FieldId::FlapAngle, 40, 2.0, -40.0, 0, Unit::Degrees),
    FieldTransform::new(FieldId::WingTiltOverride, 1, ON_OFF, Unit::Enum),
    FieldTransform::linear(FieldId::TiltAngle, 90, 1.0, 0.0, 0, Unit::Degrees),
    FieldTransform::linear(FieldId::KnobSpeed, 250, 1.0, 0.0, 0, Unit::KilometersPerHour),
    FieldTransform::linear(FieldId::KnobAltitude, 200, 15.0, 0.0, 0, Unit::Meters),
    FieldTransform::linear(FieldId::KnobHeading, 358, 2.0, 0.0, 0, Unit::Degrees),
    FieldTransform::linear(FieldId::StickThrottle, 200, 0.005, 0.0, 3, Unit::Unitless),
    FieldTransform::new(FieldId::StickRoll, 200, STICK_AXIS, Unit::Unitless),
    FieldTransform::new(FieldId::StickPitch, 200, STICK_AXIS, Unit::Unitless),
    FieldTransform::new(FieldId::StickYaw, 200, STICK_AXIS, Unit::Unitless),
    FieldTransform::linear(
        FieldId::LonOfLp,
        3_600_000_000,
        1e-7,
        -180.0,
        7,
        Unit::Degrees,
    ),
    FieldTransform::linear(
        FieldId::LatOfLp,
        1_800_000_000,
        1e-7,
        -90.0,
        7,
        Unit::Degrees,
    ),
    FieldTransform::linear(FieldId::AltOfLp, 60_000, 0.025, -500.0, 3, Unit::Meters),
    FieldTransform::new(FieldId::EngineStartStop, 1, ON_OFF, Unit::Enum),
    FieldTransform::new(FieldId::RaftDrop, 1, ON_OFF, Unit::Enum),
];

pub fn transform_for(field: FieldId) -> &'static FieldTransform {
    &FIELD_TRANSFORMS[field.index()]
}

#[cfg(test)]
mod tests {
    use super::{FIELD_TRANSFORMS, Transform, transform_for};
    use crate::protocol::frame::FieldId;

    #[test]
    fn table_is_indexed_by_field() {
        for (index, entry) in FIELD_TRANSFORMS.iter().enumerate() {
            assert_eq!(entry.field.index(), index);
        }
        assert_eq!(transform_for(FieldId::AltOfLp).domain_max, 60_000);
    }

    #[test]
    fn named_domains_cover_their_labels() {
        for entry in &FIELD_TRANSFORMS {
            if let Transform::Named(labels) = entry.transform {
                assert_eq!(labels.len() as u32, entry.domain_max + 1, "{}", entry.field);
            }
        }
    }
}
