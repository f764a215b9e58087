use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::convert::UnitConverter;
use crate::protocol::frame::{FrameValidator, ValidatorConfig};
use crate::source::{
    BinaryFrameSource, CaptureFormat, FrameEvent, FrameSource, HexFrameSource, SourceError,
};
use crate::{DecodeSummary, InputInfo, Report, make_stub_report};

mod frames;
mod rejections;

use frames::decode_event;
use rejections::RejectionCounter;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decodes every frame of a capture file into a report.
pub fn analyze_file(
    path: &Path,
    format: CaptureFormat,
    config: &ValidatorConfig,
) -> Result<Report, AnalysisError> {
    let input = InputInfo {
        path: path.display().to_string(),
        bytes: path.metadata()?.len(),
        format,
    };
    match format {
        CaptureFormat::Binary => analyze_source(input, BinaryFrameSource::open(path)?, config),
        CaptureFormat::Hex => analyze_source(input, HexFrameSource::open(path)?, config),
    }
}

/// Runs validate, decode and convert over every frame of `source`.
///
/// Rejected frames are recorded with their error kind and never stop the
/// analysis; only source errors do.
pub fn analyze_source<S: FrameSource>(
    input: InputInfo,
    mut source: S,
    config: &ValidatorConfig,
) -> Result<Report, AnalysisError> {
    let validator = FrameValidator::new(*config);
    let converter = UnitConverter::new();
    let mut frames = Vec::new();
    let mut rejections = RejectionCounter::default();
    let mut fields_unknown = 0u64;

    while let Some(FrameEvent { origin, data }) = source.next_frame()? {
        let index = frames.len() as u64;
        let frame = decode_event(index, origin, &data, &validator, &converter);
        match &frame.error {
            Some(error) => {
                debug!(index, kind = %error.kind, "frame rejected: {}", error.message);
                rejections.add(&error.kind);
            }
            None => {
                fields_unknown += frame
                    .fields
                    .iter()
                    .filter(|reading| reading.decoded.is_unknown())
                    .count() as u64;
            }
        }
        frames.push(frame);
    }

    let frames_total = frames.len() as u64;
    let frames_rejected = rejections.total();
    let summary = DecodeSummary {
        frames_total,
        frames_accepted: frames_total - frames_rejected,
        frames_rejected,
        fields_unknown,
        rejections: rejections.into_summaries(),
    };
    info!(
        frames_total,
        frames_accepted = summary.frames_accepted,
        frames_rejected,
        "capture analysed"
    );

    let mut report = make_stub_report(input);
    report.summary = summary;
    report.frames = frames;
    Ok(report)
}
