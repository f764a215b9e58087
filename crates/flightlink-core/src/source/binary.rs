use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use super::{FrameEvent, FrameOrigin, FrameSource, SourceError};
use crate::protocol::frame::layout::FRAME_LEN;

/// Reads back-to-back frames from a raw capture.
///
/// A trailing chunk shorter than a frame is still yielded, so validation
/// reports it instead of it being dropped.
pub struct BinaryFrameSource<R> {
    reader: R,
    offset: u64,
}

impl BinaryFrameSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> BinaryFrameSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0 }
    }
}

impl<R: Read> FrameSource for BinaryFrameSource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        let mut chunk = [0u8; FRAME_LEN];
        let filled = fill_chunk(&mut self.reader, &mut chunk)?;
        if filled == 0 {
            return Ok(None);
        }
        let origin = FrameOrigin::Offset(self.offset);
        self.offset += filled as u64;
        Ok(Some(FrameEvent {
            origin,
            data: chunk[..filled].to_vec(),
        }))
    }
}

fn fill_chunk<R: Read>(reader: &mut R, chunk: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        match reader.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::BinaryFrameSource;
    use crate::source::{FrameOrigin, FrameSource};

    #[test]
    fn splits_into_frames_and_keeps_tail() {
        let data: Vec<u8> = (0..70u8).collect();
        let mut source = BinaryFrameSource::new(Cursor::new(data));

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.origin, FrameOrigin::Offset(0));
        assert_eq!(first.data.len(), 32);

        let second = source.next_frame().unwrap().unwrap();
        assert_eq!(second.origin, FrameOrigin::Offset(32));
        assert_eq!(second.data[0], 32);

        let tail = source.next_frame().unwrap().unwrap();
        assert_eq!(tail.origin, FrameOrigin::Offset(64));
        assert_eq!(tail.data, vec![64, 65, 66, 67, 68, 69]);

        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn empty_input_has_no_frames() {
        let mut source = BinaryFrameSource::new(Cursor::new(Vec::new()));
        assert!(source.next_frame().unwrap().is_none());
    }
}
