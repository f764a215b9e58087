//! Flightlink core library for flight-control frame decoding.
//!
//! This crate implements the decode pipeline used by the CLI: a 32-byte frame
//! is validated (length, sync, addresses, CRC-16), decoded field by field
//! through a bounds-checked bit reader, and converted into engineering values
//! through a declarative transform table. Decoding is byte-oriented and side
//! effect free; all I/O is isolated in `source` modules, which replay recorded
//! captures into the `analysis` layer that builds a deterministic report.
//!
//! Invariants:
//! - A record only exists after a frame passed every validation check.
//! - Validation is fail-fast and each failure has its own error variant.
//! - Raw values outside a field's domain convert to `Unknown`, never to a
//!   number.
//!
//! Version française (résumé):
//! Cette crate valide puis décode les trames de commande de vol de 32 octets
//! et convertit les champs bruts en valeurs physiques. Les E/S restent dans
//! `source`, l'agrégation dans `analysis`. Une valeur hors domaine devient
//! `Unknown` au lieu d'un nombre plausible.
//!
//! # Examples
//! ```
//! use flightlink_core::{FlightControlRecord, ValidatorConfig, decode_frame, encode};
//!
//! let record = FlightControlRecord { mode_override: 1, ..Default::default() };
//! let frame = encode(&record, &ValidatorConfig::default())?;
//! assert_eq!(decode_frame(&frame)?, record);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
pub mod convert;
pub mod protocol;
mod source;

pub use analysis::{AnalysisError, analyze_file, analyze_source};
pub use convert::{DecodedValue, FieldReading, Unit, UnitConverter, to_engineering_value};
pub use protocol::frame::{
    BitFieldReader, Crc16Variant, EncodeError, FieldId, FlightControlRecord, FrameError,
    FrameValidator, ReaderError, ValidatedFrame, ValidatorConfig, decode, encode, layout,
    validate_and_decode,
};
pub use source::{
    BinaryFrameSource, CaptureFormat, FrameEvent, FrameOrigin, FrameSource, HexFrameSource,
    SourceError,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not stamp the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Validates and decodes `buffer` with the default link configuration.
///
/// # Examples
/// ```
/// use flightlink_core::{FrameError, decode_frame};
///
/// let err = decode_frame(&[0u8; 32]).unwrap_err();
/// assert!(matches!(err, FrameError::InvalidSync { .. }));
/// ```
pub fn decode_frame(buffer: &[u8]) -> Result<FlightControlRecord, FrameError> {
    validate_and_decode(buffer, &ValidatorConfig::default())
}

/// Decode report for one capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input capture metadata.
    pub input: InputInfo,
    /// Frame and rejection counters.
    pub summary: DecodeSummary,
    /// Per-frame results in capture order.
    pub frames: Vec<FrameReport>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input capture metadata embedded in reports.
///
/// # Examples
/// ```
/// use flightlink_core::{CaptureFormat, InputInfo};
///
/// let input = InputInfo {
///     path: "frames.bin".to_string(),
///     bytes: 64,
///     format: CaptureFormat::Binary,
/// };
/// assert_eq!(input.bytes, 64);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
    pub format: CaptureFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeSummary {
    pub frames_total: u64,
    pub frames_accepted: u64,
    pub frames_rejected: u64,
    /// Fields of accepted frames whose raw value was outside its domain.
    pub fields_unknown: u64,
    /// Rejection counts per error kind, sorted by kind.
    pub rejections: Vec<RejectionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionSummary {
    /// Stable error kind (e.g., `checksum_mismatch`).
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStatus {
    Accepted,
    Rejected,
}

/// Result for a single frame. Rejected frames carry only the error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameReport {
    /// 0-based position in the capture.
    pub index: u64,
    pub origin: FrameOrigin,
    pub status: FrameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FrameErrorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<FlightControlRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldReading>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameErrorReport {
    pub kind: String,
    pub message: String,
}

/// Build a report with base fields filled and no frames.
///
/// # Examples
/// ```
/// use flightlink_core::{CaptureFormat, InputInfo, make_stub_report};
///
/// let report = make_stub_report(InputInfo {
///     path: "frames.hex".to_string(),
///     bytes: 0,
///     format: CaptureFormat::Hex,
/// });
/// assert_eq!(report.report_version, flightlink_core::REPORT_VERSION);
/// assert!(report.frames.is_empty());
/// ```
pub fn make_stub_report(input: InputInfo) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "flightlink".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input,
        summary: DecodeSummary::default(),
        frames: vec![],
    }
}
