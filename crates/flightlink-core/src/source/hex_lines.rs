use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use super::{FrameEvent, FrameOrigin, FrameSource, SourceError};

/// Reads one hex-encoded frame per line.
///
/// Blank lines and lines starting with `#` are skipped; whitespace inside a
/// line is ignored so `AF 0A 01 ...` dumps work as-is.
pub struct HexFrameSource<R> {
    lines: Lines<R>,
    line: usize,
}

impl HexFrameSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> HexFrameSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> FrameSource for HexFrameSource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let compact: String = trimmed.split_whitespace().collect();
            let data = hex::decode(&compact).map_err(|err| SourceError::Hex {
                line: self.line,
                message: err.to_string(),
            })?;
            return Ok(Some(FrameEvent {
                origin: FrameOrigin::Line(self.line),
                data,
            }));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::HexFrameSource;
    use crate::source::{FrameOrigin, FrameSource, SourceError};

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# capture\n\nAF 0A 01\n  deadbeef  \n";
        let mut source = HexFrameSource::new(Cursor::new(text));

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.origin, FrameOrigin::Line(3));
        assert_eq!(first.data, vec![0xAF, 0x0A, 0x01]);

        let second = source.next_frame().unwrap().unwrap();
        assert_eq!(second.origin, FrameOrigin::Line(4));
        assert_eq!(second.data, vec![0xDE, 0xAD, 0xBE, 0xEF]);

        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn bad_hex_reports_line() {
        let mut source = HexFrameSource::new(Cursor::new("AF0A\nAFZ\n"));
        assert!(source.next_frame().unwrap().is_some());
        let err = source.next_frame().unwrap_err();
        assert!(matches!(err, SourceError::Hex { line: 2, .. }));
    }
}
