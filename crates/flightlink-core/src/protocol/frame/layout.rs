use super::field::FieldId;

pub const FRAME_LEN: usize = 32;

pub const FRAME_SYNC_OFFSET: usize = 0;
pub const DESTINATION_OFFSET: usize = 1;
pub const SOURCE_OFFSET: usize = 2;
pub const RESERVED_OFFSET: usize = 3;
pub const PAYLOAD_RANGE: std::ops::Range<usize> = 4..30;
pub const PAYLOAD_LEN: usize = 26;
pub const CRC_OFFSET: usize = 30;
pub const CRC_RANGE: std::ops::Range<usize> = 30..32;

pub const FRAME_SYNC: u8 = 0xAF;
pub const DESTINATION_ADDRESS: u8 = 0x0A;
pub const SOURCE_ADDRESS: u8 = 0x01;

/// Bit span inside a single byte; `position` counts from the LSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSpan {
    pub byte: usize,
    pub position: u8,
    pub count: u8,
}

impl BitSpan {
    pub const fn new(byte: usize, position: u8, count: u8) -> Self {
        Self {
            byte,
            position,
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    Bits(BitSpan),
    Byte(usize),
    /// Multi-byte integer, most significant byte first.
    BigEndian { start: usize, len: usize },
}

impl FieldLocation {
    pub const fn bit_width(self) -> u32 {
        match self {
            FieldLocation::Bits(span) => span.count as u32,
            FieldLocation::Byte(_) => 8,
            FieldLocation::BigEndian { len, .. } => (len as u32) * 8,
        }
    }
}

pub const MODE_OVERRIDE_BITS: BitSpan = BitSpan::new(4, 7, 1);
pub const FLIGHT_MODE_BITS: BitSpan = BitSpan::new(4, 5, 2);
pub const MODE_ENGAGE_BITS: BitSpan = BitSpan::new(4, 1, 4);
pub const FLAP_OVERRIDE_BITS: BitSpan = BitSpan::new(5, 7, 1);
pub const FLAP_ANGLE_BITS: BitSpan = BitSpan::new(5, 1, 6);
pub const WING_TILT_OVERRIDE_BITS: BitSpan = BitSpan::new(6, 7, 1);
pub const TILT_ANGLE_BITS: BitSpan = BitSpan::new(6, 0, 7);
pub const KNOB_SPEED_OFFSET: usize = 7;
pub const KNOB_ALTITUDE_OFFSET: usize = 8;
pub const KNOB_HEADING_OFFSET: usize = 9;
pub const STICK_THROTTLE_OFFSET: usize = 10;
pub const STICK_ROLL_OFFSET: usize = 11;
pub const STICK_PITCH_OFFSET: usize = 12;
pub const STICK_YAW_OFFSET: usize = 13;
pub const LON_OF_LP_OFFSET: usize = 14;
pub const LAT_OF_LP_OFFSET: usize = 18;
pub const ALT_OF_LP_OFFSET: usize = 22;
pub const ENGINE_START_STOP_BITS: BitSpan = BitSpan::new(24, 7, 1);
pub const RAFT_DROP_BITS: BitSpan = BitSpan::new(24, 0, 1);

/// Wire location of every field, indexed by `FieldId::index`.
pub const FIELD_LAYOUT: [(FieldId, FieldLocation); FieldId::COUNT] = [
    (FieldId::ModeOverride, FieldLocation::Bits(MODE_OVERRIDE_BITS)),
    (FieldId::FlightMode, FieldLocation::Bits(FLIGHT_MODE_BITS)),
    (FieldId::ModeEngage, FieldLocation::Bits(MODE_ENGAGE_BITS)),
    (FieldId::FlapOverride, FieldLocation::Bits(FLAP_OVERRIDE_BITS)),
    (FieldId::FlapAngle, FieldLocation::Bits(FLAP_ANGLE_BITS)),
    (
        FieldId::WingTiltOverride,
        FieldLocation::Bits(WING_TILT_OVERRIDE_BITS),
    ),
    (FieldId::TiltAngle, FieldLocation::Bits(TILT_ANGLE_BITS)),
    (FieldId::KnobSpeed, FieldLocation::Byte(KNOB_SPEED_OFFSET)),
    (FieldId::KnobAltitude, FieldLocation::Byte(KNOB_ALTITUDE_OFFSET)),
    (FieldId::KnobHeading, FieldLocation::Byte(KNOB_HEADING_OFFSET)),
    (FieldId::StickThrottle, FieldLocation::Byte(STICK_THROTTLE_OFFSET)),
    (FieldId::StickRoll, FieldLocation::Byte(STICK_ROLL_OFFSET)),
    (FieldId::StickPitch, FieldLocation::Byte(STICK_PITCH_OFFSET)),
    (FieldId::StickYaw, FieldLocation::Byte(STICK_YAW_OFFSET)),
    (
        FieldId::LonOfLp,
        FieldLocation::BigEndian {
            start: LON_OF_LP_OFFSET,
            len: 4,
        },
    ),
    (
        FieldId::LatOfLp,
        FieldLocation::BigEndian {
            start: LAT_OF_LP_OFFSET,
            len: 4,
        },
    ),
    (
        FieldId::AltOfLp,
        FieldLocation::BigEndian {
            start: ALT_OF_LP_OFFSET,
            len: 2,
        },
    ),
    (
        FieldId::EngineStartStop,
        FieldLocation::Bits(ENGINE_START_STOP_BITS),
    ),
    (FieldId::RaftDrop, FieldLocation::Bits(RAFT_DROP_BITS)),
];

pub const fn location_of(field: FieldId) -> FieldLocation {
    FIELD_LAYOUT[field.index()].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_indexed_by_field() {
        for (index, (field, _)) in FIELD_LAYOUT.iter().enumerate() {
            assert_eq!(field.index(), index);
        }
    }

    #[test]
    fn fields_stay_inside_payload() {
        for (field, location) in FIELD_LAYOUT {
            let (start, end) = match location {
                FieldLocation::Bits(span) => {
                    assert!(span.count >= 1, "{field}");
                    assert!(span.position + span.count <= 8, "{field}");
                    (span.byte, span.byte + 1)
                }
                FieldLocation::Byte(index) => (index, index + 1),
                FieldLocation::BigEndian { start, len } => {
                    assert!(len <= 4, "{field}");
                    (start, start + len)
                }
            };
            assert!(start >= PAYLOAD_RANGE.start, "{field}");
            assert!(end <= PAYLOAD_RANGE.end, "{field}");
        }
    }

    #[test]
    fn bit_fields_do_not_overlap() {
        let mut used = [0u8; FRAME_LEN];
        for (field, location) in FIELD_LAYOUT {
            match location {
                FieldLocation::Bits(span) => {
                    let mask = (((1u16 << span.count) - 1) as u8) << span.position;
                    assert_eq!(used[span.byte] & mask, 0, "{field}");
                    used[span.byte] |= mask;
                }
                FieldLocation::Byte(index) => {
                    assert_eq!(used[index], 0, "{field}");
                    used[index] = 0xFF;
                }
                FieldLocation::BigEndian { start, len } => {
                    for byte in &mut used[start..start + len] {
                        assert_eq!(*byte, 0, "{field}");
                        *byte = 0xFF;
                    }
                }
            }
        }
    }

    #[test]
    fn payload_len_matches_range() {
        assert_eq!(PAYLOAD_RANGE.len(), PAYLOAD_LEN);
        assert_eq!(CRC_RANGE.start, CRC_OFFSET);
        assert_eq!(CRC_RANGE.end, FRAME_LEN);
    }
}
