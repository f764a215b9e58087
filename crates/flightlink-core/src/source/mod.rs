mod binary;
mod hex_lines;

pub use binary::BinaryFrameSource;
pub use hex_lines::HexFrameSource;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a frame came from inside its capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameOrigin {
    /// Byte offset in a binary capture.
    Offset(u64),
    /// 1-based line number in a hex capture.
    Line(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEvent {
    pub origin: FrameOrigin,
    pub data: Vec<u8>,
}

pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex on line {line}: {message}")]
    Hex { line: usize, message: String },
}

/// Capture encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureFormat {
    /// Back-to-back 32-byte frames.
    Binary,
    /// One hex-encoded frame per line.
    Hex,
}

impl CaptureFormat {
    /// `.hex` and `.txt` are hex captures; anything else is binary.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "hex" | "txt" => CaptureFormat::Hex,
            _ => CaptureFormat::Binary,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::CaptureFormat;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            CaptureFormat::from_path(Path::new("frames.HEX")),
            CaptureFormat::Hex
        );
        assert_eq!(
            CaptureFormat::from_path(Path::new("frames.txt")),
            CaptureFormat::Hex
        );
        assert_eq!(
            CaptureFormat::from_path(Path::new("frames.bin")),
            CaptureFormat::Binary
        );
        assert_eq!(
            CaptureFormat::from_path(Path::new("frames")),
            CaptureFormat::Binary
        );
    }
}
