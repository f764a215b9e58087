use crc::{Algorithm, CRC_16_IBM_3740, CRC_16_XMODEM, Crc};
use serde::{Deserialize, Serialize};

static CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);
static XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// CRC-16 parameter sets of the CCITT family (polynomial 0x1021, MSB first,
/// no reflection, no final XOR). They differ only in the initial value.
///
/// # Examples
/// ```
/// use flightlink_core::Crc16Variant;
///
/// assert_eq!(Crc16Variant::CcittFalse.checksum(b"123456789"), 0x29B1);
/// assert_eq!(Crc16Variant::Xmodem.checksum(b"123456789"), 0x31C3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Crc16Variant {
    /// CRC-16/IBM-3740, initial value 0xFFFF.
    #[default]
    CcittFalse,
    /// CRC-16/XMODEM, initial value 0x0000.
    Xmodem,
}

impl Crc16Variant {
    /// Catalog parameters of this variant.
    pub fn algorithm(self) -> &'static Algorithm<u16> {
        self.engine().algorithm
    }

    pub fn checksum(self, bytes: &[u8]) -> u16 {
        self.engine().checksum(bytes)
    }

    fn engine(self) -> &'static Crc<u16> {
        match self {
            Crc16Variant::CcittFalse => &CCITT_FALSE,
            Crc16Variant::Xmodem => &XMODEM,
        }
    }
}
