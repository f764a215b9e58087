use serde::{Deserialize, Serialize};

use super::crc::Crc16Variant;
use super::error::FrameError;
use super::layout;
use super::reader::BitFieldReader;

/// Expected header values and checksum parameters.
///
/// Defaults match the deployed link; every field may be overridden from a
/// configuration file.
///
/// # Examples
/// ```
/// use flightlink_core::{Crc16Variant, ValidatorConfig};
///
/// let config = ValidatorConfig::default();
/// assert_eq!(config.frame_sync, 0xAF);
/// assert_eq!(config.crc, Crc16Variant::CcittFalse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub frame_sync: u8,
    pub destination_address: u8,
    pub source_address: u8,
    pub crc: Crc16Variant,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            frame_sync: layout::FRAME_SYNC,
            destination_address: layout::DESTINATION_ADDRESS,
            source_address: layout::SOURCE_ADDRESS,
            crc: Crc16Variant::default(),
        }
    }
}

/// A frame that passed every structural and checksum check.
///
/// Only `FrameValidator::validate` constructs this type.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedFrame<'a> {
    bytes: &'a [u8; layout::FRAME_LEN],
}

impl<'a> ValidatedFrame<'a> {
    pub fn as_bytes(&self) -> &'a [u8; layout::FRAME_LEN] {
        self.bytes
    }

    pub fn reader(&self) -> BitFieldReader<'a> {
        BitFieldReader::new(self.bytes)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameValidator {
    config: ValidatorConfig,
}

impl FrameValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Runs length, sync, destination, source and checksum checks in that
    /// order and stops at the first failure.
    pub fn validate<'a>(&self, buffer: &'a [u8]) -> Result<ValidatedFrame<'a>, FrameError> {
        let bytes: &'a [u8; layout::FRAME_LEN] =
            buffer.try_into().map_err(|_| FrameError::InvalidLength {
                expected: layout::FRAME_LEN,
                actual: buffer.len(),
            })?;
        let reader = BitFieldReader::new(bytes);

        let sync = reader.byte(layout::FRAME_SYNC_OFFSET)?;
        if sync != self.config.frame_sync {
            return Err(FrameError::InvalidSync {
                expected: self.config.frame_sync,
                actual: sync,
            });
        }

        let destination = reader.byte(layout::DESTINATION_OFFSET)?;
        if destination != self.config.destination_address {
            return Err(FrameError::InvalidDestinationAddress {
                expected: self.config.destination_address,
                actual: destination,
            });
        }

        let source = reader.byte(layout::SOURCE_OFFSET)?;
        if source != self.config.source_address {
            return Err(FrameError::InvalidSourceAddress {
                expected: self.config.source_address,
                actual: source,
            });
        }

        let payload = reader.byte_range(layout::PAYLOAD_RANGE.start, layout::PAYLOAD_LEN)?;
        let computed = self.config.crc.checksum(payload);
        let received = reader.read_u16_be(layout::CRC_OFFSET)?;
        if computed != received {
            return Err(FrameError::ChecksumMismatch { computed, received });
        }

        Ok(ValidatedFrame { bytes })
    }
}
