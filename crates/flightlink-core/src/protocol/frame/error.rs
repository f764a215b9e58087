use thiserror::Error;

use super::field::FieldId;

/// Out-of-bounds bit or byte access.
///
/// Against a validated frame these only occur when the layout itself is
/// wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReaderError {
    #[error(
        "bit range out of bounds: byte {byte_index}, position {bit_position}, count {bit_count} (buffer length {len})"
    )]
    BitRange {
        byte_index: usize,
        bit_position: u8,
        bit_count: u8,
        len: usize,
    },
    #[error("byte range out of bounds: start {start}, count {count} (buffer length {len})")]
    ByteRange {
        start: usize,
        count: usize,
        len: usize,
    },
}

/// Errors returned by frame validation and decoding.
///
/// # Examples
/// ```
/// use flightlink_core::FrameError;
///
/// let err = FrameError::InvalidSync { expected: 0xAF, actual: 0x00 };
/// assert!(err.to_string().contains("invalid frame sync"));
/// assert_eq!(err.kind(), "invalid_sync");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("invalid frame length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid frame sync: expected {expected:#04x}, got {actual:#04x}")]
    InvalidSync { expected: u8, actual: u8 },
    #[error("invalid destination address: expected {expected:#04x}, got {actual:#04x}")]
    InvalidDestinationAddress { expected: u8, actual: u8 },
    #[error("invalid source address: expected {expected:#04x}, got {actual:#04x}")]
    InvalidSourceAddress { expected: u8, actual: u8 },
    #[error("checksum mismatch: computed {computed:#06x}, received {received:#06x}")]
    ChecksumMismatch { computed: u16, received: u16 },
    #[error("frame layout error: {0}")]
    Layout(#[from] ReaderError),
}

impl FrameError {
    /// Stable identifier used to aggregate rejections in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            FrameError::InvalidLength { .. } => "invalid_length",
            FrameError::InvalidSync { .. } => "invalid_sync",
            FrameError::InvalidDestinationAddress { .. } => "invalid_destination_address",
            FrameError::InvalidSourceAddress { .. } => "invalid_source_address",
            FrameError::ChecksumMismatch { .. } => "checksum_mismatch",
            FrameError::Layout(_) => "layout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("field {field} value {value} does not fit in {bits} bits")]
    FieldOverflow { field: FieldId, value: u32, bits: u32 },
    #[error("frame layout error: {0}")]
    Layout(#[from] ReaderError),
}

#[cfg(test)]
mod tests {
    use super::{FrameError, ReaderError};

    #[test]
    fn kinds_are_distinct() {
        let errors = [
            FrameError::InvalidLength {
                expected: 32,
                actual: 31,
            },
            FrameError::InvalidSync {
                expected: 0xAF,
                actual: 0,
            },
            FrameError::InvalidDestinationAddress {
                expected: 0x0A,
                actual: 0,
            },
            FrameError::InvalidSourceAddress {
                expected: 0x01,
                actual: 0,
            },
            FrameError::ChecksumMismatch {
                computed: 1,
                received: 0,
            },
            FrameError::Layout(ReaderError::ByteRange {
                start: 40,
                count: 1,
                len: 32,
            }),
        ];
        let mut kinds: Vec<_> = errors.iter().map(FrameError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn checksum_message_shows_both_values() {
        let err = FrameError::ChecksumMismatch {
            computed: 0x1d0f,
            received: 0x0000,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x1d0f"));
        assert!(msg.contains("0x0000"));
    }
}
