use crate::convert::UnitConverter;
use crate::protocol::frame::{FrameValidator, decode};
use crate::source::FrameOrigin;
use crate::{FrameErrorReport, FrameReport, FrameStatus};

pub(crate) fn decode_event(
    index: u64,
    origin: FrameOrigin,
    data: &[u8],
    validator: &FrameValidator,
    converter: &UnitConverter,
) -> FrameReport {
    let decoded = validator
        .validate(data)
        .and_then(|frame| decode(&frame));

    match decoded {
        Ok(record) => FrameReport {
            index,
            origin,
            status: FrameStatus::Accepted,
            error: None,
            fields: converter.convert_record(&record),
            record: Some(record),
        },
        Err(err) => FrameReport {
            index,
            origin,
            status: FrameStatus::Rejected,
            error: Some(FrameErrorReport {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
            record: None,
            fields: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::decode_event;
    use crate::{
        FlightControlRecord, FrameOrigin, FrameStatus, FrameValidator, UnitConverter,
        ValidatorConfig, encode,
    };

    #[test]
    fn accepted_frame_carries_record_and_fields() {
        let record = FlightControlRecord {
            knob_speed: 80,
            ..FlightControlRecord::default()
        };
        let frame = encode(&record, &ValidatorConfig::default()).unwrap();
        let report = decode_event(
            0,
            FrameOrigin::Offset(0),
            &frame,
            &FrameValidator::default(),
            &UnitConverter::new(),
        );
        assert_eq!(report.status, FrameStatus::Accepted);
        assert_eq!(report.record, Some(record));
        assert_eq!(report.fields.len(), 19);
        assert!(report.error.is_none());
    }

    #[test]
    fn rejected_frame_carries_kind_and_message() {
        let mut frame =
            encode(&FlightControlRecord::default(), &ValidatorConfig::default()).unwrap();
        frame[31] ^= 0x01;
        let report = decode_event(
            7,
            FrameOrigin::Line(8),
            &frame,
            &FrameValidator::default(),
            &UnitConverter::new(),
        );
        assert_eq!(report.status, FrameStatus::Rejected);
        let error = report.error.expect("error");
        assert_eq!(error.kind, "checksum_mismatch");
        assert!(error.message.contains("checksum mismatch"));
        assert_eq!(report.origin, FrameOrigin::Line(8));
    }
}
