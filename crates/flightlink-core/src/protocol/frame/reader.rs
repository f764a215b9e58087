use super::error::ReaderError;
use super::layout::{BitSpan, FieldLocation};

/// Bounds-checked bit and byte access over a borrowed buffer.
///
/// The reader never mutates the buffer and keeps no cursor; every query is
/// independent.
///
/// # Examples
/// ```
/// use flightlink_core::BitFieldReader;
///
/// let reader = BitFieldReader::new(&[0b1010_0110, 0x12, 0x34]);
/// assert_eq!(reader.bits(0, 5, 2).unwrap(), 0b01);
/// assert_eq!(reader.read_u16_be(1).unwrap(), 0x1234);
/// assert!(reader.byte(3).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitFieldReader<'a> {
    buffer: &'a [u8],
}

impl<'a> BitFieldReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Extracts `bit_count` bits starting at `bit_position` (0 = LSB) of one
    /// byte, right-aligned. A span may not cross a byte boundary.
    pub fn bits(
        &self,
        byte_index: usize,
        bit_position: u8,
        bit_count: u8,
    ) -> Result<u8, ReaderError> {
        let span_end = u16::from(bit_position) + u16::from(bit_count);
        let byte = match self.buffer.get(byte_index) {
            Some(byte) if bit_count >= 1 && span_end <= 8 => *byte,
            _ => {
                return Err(ReaderError::BitRange {
                    byte_index,
                    bit_position,
                    bit_count,
                    len: self.buffer.len(),
                });
            }
        };
        let mask = ((1u16 << bit_count) - 1) as u8;
        Ok((byte >> bit_position) & mask)
    }

    pub fn byte(&self, byte_index: usize) -> Result<u8, ReaderError> {
        self.buffer
            .get(byte_index)
            .copied()
            .ok_or(ReaderError::ByteRange {
                start: byte_index,
                count: 1,
                len: self.buffer.len(),
            })
    }

    /// Contiguous run of `count` bytes; `start + count == len` is valid.
    pub fn byte_range(&self, start: usize, count: usize) -> Result<&'a [u8], ReaderError> {
        let err = ReaderError::ByteRange {
            start,
            count,
            len: self.buffer.len(),
        };
        let end = start.checked_add(count).ok_or(err)?;
        self.buffer.get(start..end).ok_or(err)
    }

    pub fn read_span(&self, span: BitSpan) -> Result<u8, ReaderError> {
        self.bits(span.byte, span.position, span.count)
    }

    pub fn read_u16_be(&self, start: usize) -> Result<u16, ReaderError> {
        Ok(u16::from_be_bytes(self.read_array(start)?))
    }

    pub fn read_u32_be(&self, start: usize) -> Result<u32, ReaderError> {
        Ok(u32::from_be_bytes(self.read_array(start)?))
    }

    /// Raw value at a layout location, widened to `u32`.
    pub fn read_location(&self, location: FieldLocation) -> Result<u32, ReaderError> {
        match location {
            FieldLocation::Bits(span) => self.read_span(span).map(u32::from),
            FieldLocation::Byte(index) => self.byte(index).map(u32::from),
            FieldLocation::BigEndian { start, len } => {
                if len > 4 {
                    return Err(ReaderError::ByteRange {
                        start,
                        count: len,
                        len: self.buffer.len(),
                    });
                }
                let bytes = self.byte_range(start, len)?;
                Ok(bytes
                    .iter()
                    .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte)))
            }
        }
    }

    fn read_array<const N: usize>(&self, start: usize) -> Result<[u8; N], ReaderError> {
        let bytes = self.byte_range(start, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
