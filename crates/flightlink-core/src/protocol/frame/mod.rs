//! Flight-control frame decoding.
//!
//! A frame is exactly 32 bytes: sync, destination and source address bytes,
//! one reserved byte, a 26-byte payload and a big-endian CRC-16 over the
//! payload. The validator checks those in a fixed order and hands out a
//! `ValidatedFrame`; only that type can be decoded, so field extraction never
//! runs on untrusted bytes.
//!
//! Offsets live in `layout`, safe reads in `reader`. The `encoder` is the
//! inverse of the parser and exists to produce conforming frames for tests
//! and fixtures.
//!
//! Version française (résumé):
//! Le module valide puis décode la trame de 32 octets (synchro, adresses,
//! CRC-16 sur les octets 4 à 29). Les positions sont dans `layout`, les
//! lectures bornées dans `reader`.

pub mod crc;
pub mod encoder;
pub mod error;
pub mod field;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod record;
pub mod validator;

pub use crc::Crc16Variant;
pub use encoder::encode;
pub use error::{EncodeError, FrameError, ReaderError};
pub use field::FieldId;
pub use parser::{decode, validate_and_decode};
pub use reader::BitFieldReader;
pub use record::FlightControlRecord;
pub use validator::{FrameValidator, ValidatedFrame, ValidatorConfig};
