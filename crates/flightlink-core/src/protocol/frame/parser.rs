use super::error::FrameError;
use super::layout;
use super::record::FlightControlRecord;
use super::validator::{FrameValidator, ValidatedFrame, ValidatorConfig};

/// Decodes every field of a validated frame.
///
/// Integrity is the validator's job; a failure here means the layout table
/// is wrong, never that the frame is.
pub fn decode(frame: &ValidatedFrame<'_>) -> Result<FlightControlRecord, FrameError> {
    let reader = frame.reader();

    Ok(FlightControlRecord {
        mode_override: reader.read_span(layout::MODE_OVERRIDE_BITS)?,
        flight_mode: reader.read_span(layout::FLIGHT_MODE_BITS)?,
        mode_engage: reader.read_span(layout::MODE_ENGAGE_BITS)?,
        flap_override: reader.read_span(layout::FLAP_OVERRIDE_BITS)?,
        flap_angle: reader.read_span(layout::FLAP_ANGLE_BITS)?,
        wing_tilt_override: reader.read_span(layout::WING_TILT_OVERRIDE_BITS)?,
        tilt_angle: reader.read_span(layout::TILT_ANGLE_BITS)?,
        knob_speed: reader.byte(layout::KNOB_SPEED_OFFSET)?,
        knob_altitude: reader.byte(layout::KNOB_ALTITUDE_OFFSET)?,
        knob_heading: reader.byte(layout::KNOB_HEADING_OFFSET)?,
        stick_throttle: reader.byte(layout::STICK_THROTTLE_OFFSET)?,
        stick_roll: reader.byte(layout::STICK_ROLL_OFFSET)?,
        stick_pitch: reader.byte(layout::STICK_PITCH_OFFSET)?,
        stick_yaw: reader.byte(layout::STICK_YAW_OFFSET)?,
        lon_of_lp: reader.read_u32_be(layout::LON_OF_LP_OFFSET)?,
        lat_of_lp: reader.read_u32_be(layout::LAT_OF_LP_OFFSET)?,
        alt_of_lp: reader.read_u16_be(layout::ALT_OF_LP_OFFSET)?,
        engine_start_stop: reader.read_span(layout::ENGINE_START_STOP_BITS)?,
        raft_drop: reader.read_span(layout::RAFT_DROP_BITS)?,
    })
}

/// Validates `buffer` against `config`, then decodes it.
///
/// # Examples
/// ```
/// use flightlink_core::{FrameError, ValidatorConfig, validate_and_decode};
///
/// let err = validate_and_decode(&[0xAF; 16], &ValidatorConfig::default()).unwrap_err();
/// assert!(matches!(err, FrameError::InvalidLength { actual: 16, .. }));
/// ```
pub fn validate_and_decode(
    buffer: &[u8],
    config: &ValidatorConfig,
) -> Result<FlightControlRecord, FrameError> {
    let frame = FrameValidator::new(*config).validate(buffer)?;
    decode(&frame)
}
