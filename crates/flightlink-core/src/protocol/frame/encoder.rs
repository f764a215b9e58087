use super::error::{EncodeError, ReaderError};
use super::field::FieldId;
use super::layout::{self, FieldLocation};
use super::record::FlightControlRecord;
use super::validator::ValidatorConfig;

/// Builds a conforming frame for `record`: header bytes from `config`, every
/// field packed per the layout table, CRC appended big-endian.
///
/// The reserved byte and the unused payload bytes are zero.
///
/// # Examples
/// ```
/// use flightlink_core::{FlightControlRecord, ValidatorConfig, encode, validate_and_decode};
///
/// let config = ValidatorConfig::default();
/// let record = FlightControlRecord { knob_speed: 120, ..Default::default() };
/// let frame = encode(&record, &config)?;
/// assert_eq!(validate_and_decode(&frame, &config)?, record);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode(
    record: &FlightControlRecord,
    config: &ValidatorConfig,
) -> Result<[u8; layout::FRAME_LEN], EncodeError> {
    let mut frame = [0u8; layout::FRAME_LEN];
    frame[layout::FRAME_SYNC_OFFSET] = config.frame_sync;
    frame[layout::DESTINATION_OFFSET] = config.destination_address;
    frame[layout::SOURCE_OFFSET] = config.source_address;

    for (field, location) in layout::FIELD_LAYOUT {
        write_field(&mut frame, field, location, record.raw(field))?;
    }

    let crc = config.crc.checksum(&frame[layout::PAYLOAD_RANGE]);
    frame[layout::CRC_RANGE].copy_from_slice(&crc.to_be_bytes());
    Ok(frame)
}

fn write_field(
    frame: &mut [u8; layout::FRAME_LEN],
    field: FieldId,
    location: FieldLocation,
    value: u32,
) -> Result<(), EncodeError> {
    let bits = location.bit_width();
    if bits < u32::BITS && value >> bits != 0 {
        return Err(EncodeError::FieldOverflow { field, value, bits });
    }

    match location {
        FieldLocation::Bits(span) => {
            let byte = slot(frame, span.byte)?;
            // Width checked above, so the shifted value stays inside the span.
            *byte |= (value as u8) << span.position;
        }
        FieldLocation::Byte(index) => {
            *slot(frame, index)? = value as u8;
        }
        FieldLocation::BigEndian { start, len } => {
            let range_err = ReaderError::ByteRange {
                start,
                count: len,
                len: layout::FRAME_LEN,
            };
            let bytes = value.to_be_bytes();
            let source = bytes
                .len()
                .checked_sub(len)
                .and_then(|skip| bytes.get(skip..))
                .ok_or(range_err)?;
            let end = start.checked_add(len).ok_or(range_err)?;
            let target = frame.get_mut(start..end).ok_or(range_err)?;
            target.copy_from_slice(source);
        }
    }
    Ok(())
}

fn slot(frame: &mut [u8; layout::FRAME_LEN], index: usize) -> Result<&mut u8, ReaderError> {
    frame.get_mut(index).ok_or(ReaderError::ByteRange {
        start: index,
        count: 1,
        len: layout::FRAME_LEN,
    })
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::protocol::frame::error::EncodeError;
    use crate::protocol::frame::field::FieldId;
    use crate::protocol::frame::layout;
    use crate::protocol::frame::parser::validate_and_decode;
    use crate::protocol::frame::record::FlightControlRecord;
    use crate::protocol::frame::validator::ValidatorConfig;

    fn full_record() -> FlightControlRecord {
        FlightControlRecord {
            mode_override: 1,
            flight_mode: 3,
            mode_engage: 8,
            flap_override: 0,
            flap_angle: 40,
            wing_tilt_override: 1,
            tilt_angle: 90,
            knob_speed: 250,
            knob_altitude: 200,
            knob_heading: 179,
            stick_throttle: 200,
            stick_roll: 0,
            stick_pitch: 100,
            stick_yaw: 200,
            lon_of_lp: 3_600_000_000,
            lat_of_lp: 1_234_567_890,
            alt_of_lp: 60_000,
            engine_start_stop: 1,
            raft_drop: 1,
        }
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let config = ValidatorConfig::default();
        let record = full_record();
        let frame = encode(&record, &config).unwrap();
        assert_eq!(validate_and_decode(&frame, &config).unwrap(), record);
    }

    #[test]
    fn header_and_unused_bytes() {
        let frame = encode(&full_record(), &ValidatorConfig::default()).unwrap();
        assert_eq!(&frame[..4], &[0xAF, 0x0A, 0x01, 0x00]);
        assert!(frame[25..layout::CRC_OFFSET].iter().all(|b| *b == 0));
    }

    #[test]
    fn multi_byte_fields_are_big_endian() {
        let record = FlightControlRecord {
            lat_of_lp: 0x0102_0304,
            alt_of_lp: 0xA0B0,
            ..FlightControlRecord::default()
        };
        let frame = encode(&record, &ValidatorConfig::default()).unwrap();
        assert_eq!(&frame[18..22], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&frame[22..24], &[0xA0, 0xB0]);
    }

    #[test]
    fn rejects_value_wider_than_field() {
        let record = FlightControlRecord {
            flap_angle: 64,
            ..FlightControlRecord::default()
        };
        assert_eq!(
            encode(&record, &ValidatorConfig::default()).unwrap_err(),
            EncodeError::FieldOverflow {
                field: FieldId::FlapAngle,
                value: 64,
                bits: 6
            }
        );
    }

    #[test]
    fn raw_above_domain_still_encodes() {
        let record = FlightControlRecord {
            mode_engage: 15,
            knob_speed: 255,
            ..FlightControlRecord::default()
        };
        let config = ValidatorConfig::default();
        let frame = encode(&record, &config).unwrap();
        assert_eq!(validate_and_decode(&frame, &config).unwrap(), record);
    }
}
