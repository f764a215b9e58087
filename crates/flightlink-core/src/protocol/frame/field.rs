use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a decoded field, in wire order.
///
/// # Examples
/// ```
/// use flightlink_core::FieldId;
///
/// assert_eq!(FieldId::FlapAngle.name(), "flap_angle");
/// assert_eq!(FieldId::ALL[0], FieldId::ModeOverride);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    ModeOverride,
    FlightMode,
    ModeEngage,
    FlapOverride,
    FlapAngle,
    WingTiltOverride,
    TiltAngle,
    KnobSpeed,
    KnobAltitude,
    KnobHeading,
    StickThrottle,
    StickRoll,
    StickPitch,
    StickYaw,
    LonOfLp,
    LatOfLp,
    AltOfLp,
    EngineStartStop,
    RaftDrop,
}

impl FieldId {
    pub const COUNT: usize = 19;

    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::ModeOverride,
        FieldId::FlightMode,
        FieldId::ModeEngage,
        FieldId::FlapOverride,
        FieldId::FlapAngle,
        FieldId::WingTiltOverride,
        FieldId::TiltAngle,
        FieldId::KnobSpeed,
        FieldId::KnobAltitude,
        FieldId::KnobHeading,
        FieldId::StickThrottle,
        FieldId::StickRoll,
        FieldId::StickPitch,
        FieldId::StickYaw,
        FieldId::LonOfLp,
        FieldId::LatOfLp,
        FieldId::AltOfLp,
        FieldId::EngineStartStop,
        FieldId::RaftDrop,
    ];

    /// Position of the field in wire order; indexes `ALL` and the layout and
    /// transform tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            FieldId::ModeOverride => "mode_override",
            FieldId::FlightMode => "flight_mode",
            FieldId::ModeEngage => "mode_engage",
            FieldId::FlapOverride => "flap_override",
            FieldId::FlapAngle => "flap_angle",
            FieldId::WingTiltOverride => "wing_tilt_override",
            FieldId::TiltAngle => "tilt_angle",
            FieldId::KnobSpeed => "knob_speed",
            FieldId::KnobAltitude => "knob_altitude",
            FieldId::KnobHeading => "knob_heading",
            FieldId::StickThrottle => "stick_throttle",
            FieldId::StickRoll => "stick_roll",
            FieldId::StickPitch => "stick_pitch",
            FieldId::StickYaw => "stick_yaw",
            FieldId::LonOfLp => "lon_of_lp",
            FieldId::LatOfLp => "lat_of_lp",
            FieldId::AltOfLp => "alt_of_lp",
            FieldId::EngineStartStop => "engine_start_stop",
            FieldId::RaftDrop => "raft_drop",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
