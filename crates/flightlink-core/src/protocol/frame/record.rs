use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// Raw field values of one accepted frame.
///
/// Produced in a single step by the parser; landing-point fields are
/// already interpreted big-endian.
///
/// Fields are public and the type is `Default`/`Deserialize` so the encoder
/// and the JSON input of `flightlink encode` can build one. A hand-built
/// record carries no guarantee: it only describes a frame once it has gone
/// through `encode`, which rejects values wider than their field, and back
/// through validation.
///
/// # Examples
/// ```
/// use flightlink_core::{EncodeError, FlightControlRecord, ValidatorConfig, encode};
///
/// let record = FlightControlRecord { flight_mode: 4, ..Default::default() };
/// let err = encode(&record, &ValidatorConfig::default()).unwrap_err();
/// assert!(matches!(err, EncodeError::FieldOverflow { bits: 2, .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlightControlRecord {
    pub mode_override: u8,
    pub flight_mode: u8,
    pub mode_engage: u8,
    pub flap_override: u8,
    pub flap_angle: u8,
    pub wing_tilt_override: u8,
    pub tilt_angle: u8,
    pub knob_speed: u8,
    pub knob_altitude: u8,
    pub knob_heading: u8,
    pub stick_throttle: u8,
    pub stick_roll: u8,
    pub stick_pitch: u8,
    pub stick_yaw: u8,
    pub lon_of_lp: u32,
    pub lat_of_lp: u32,
    pub alt_of_lp: u16,
    pub engine_start_stop: u8,
    pub raft_drop: u8,
}

impl FlightControlRecord {
    /// Raw value of `field`, widened to `u32`.
    pub fn raw(&self, field: FieldId) -> u32 {
        match field {
            FieldId::ModeOverride => self.mode_override.into(),
            FieldId::FlightMode => self.flight_mode.into(),
            FieldId::ModeEngage => self.mode_engage.into(),
            FieldId::FlapOverride => self.flap_override.into(),
            FieldId::FlapAngle => self.flap_angle.into(),
            FieldId::WingTiltOverride => self.wing_tilt_override.into(),
            FieldId::TiltAngle => self.tilt_angle.into(),
            FieldId::KnobSpeed => self.knob_speed.into(),
            FieldId::KnobAltitude => self.knob_altitude.into(),
            FieldId::KnobHeading => self.knob_heading.into(),
            FieldId::StickThrottle => self.stick_throttle.into(),
            FieldId::StickRoll => self.stick_roll.into(),
            FieldId::StickPitch => self.stick_pitch.into(),
            FieldId::StickYaw => self.stick_yaw.into(),
            FieldId::LonOfLp => self.lon_of_lp,
            FieldId::LatOfLp => self.lat_of_lp,
            FieldId::AltOfLp => self.alt_of_lp.into(),
            FieldId::EngineStartStop => self.engine_start_stop.into(),
            FieldId::RaftDrop => self.raft_drop.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlightControlRecord;
    use crate::protocol::frame::error::EncodeError;
    use crate::protocol::frame::field::FieldId;
    use crate::protocol::frame::parser::validate_and_decode;
    use crate::protocol::frame::{ValidatorConfig, encode};

    #[test]
    fn raw_maps_each_field() {
        let record = FlightControlRecord {
            knob_heading: 179,
            lon_of_lp: 3_600_000_000,
            alt_of_lp: 60_000,
            raft_drop: 1,
            ..FlightControlRecord::default()
        };
        assert_eq!(record.raw(FieldId::KnobHeading), 179);
        assert_eq!(record.raw(FieldId::LonOfLp), 3_600_000_000);
        assert_eq!(record.raw(FieldId::AltOfLp), 60_000);
        assert_eq!(record.raw(FieldId::RaftDrop), 1);
        assert_eq!(record.raw(FieldId::StickYaw), 0);
    }

    #[test]
    fn json_rejects_missing_fields() {
        let err = serde_json::from_str::<FlightControlRecord>(r#"{"mode_override": 1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn hand_built_record_only_survives_through_encode_and_validation() {
        let config = ValidatorConfig::default();
        let json = serde_json::to_value(FlightControlRecord::default()).unwrap();
        let mut wide = json.clone();
        wide["tilt_angle"] = serde_json::Value::from(200);
        let wide: FlightControlRecord = serde_json::from_value(wide).unwrap();
        assert!(matches!(
            encode(&wide, &config),
            Err(EncodeError::FieldOverflow { field: FieldId::TiltAngle, bits: 7, .. })
        ));

        let fits: FlightControlRecord = serde_json::from_value(json).unwrap();
        let frame = encode(&fits, &config).unwrap();
        assert_eq!(validate_and_decode(&frame, &config).unwrap(), fits);
    }
}
