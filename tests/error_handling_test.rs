//! Tests covering `AchError`'s trait surface and a representative sample of
//! its variants.

use ach_core::{reader, AchError, EntryDetail};
use std::error::Error;

#[test]
fn errors_implement_std_error_and_have_non_empty_messages() {
    let errors: Vec<AchError> = vec![
        AchError::InvalidRecordType("X".to_string()),
        AchError::InvalidLineLength(50),
        AchError::InvalidStructure("test structure error".to_string()),
        AchError::EmptyFile,
        AchError::IncompleteBatch("test batch error".to_string()),
        AchError::BatchAmountZero,
        AchError::IdentificationNumber,
        AchError::ValidState("ZZ".to_string()),
        AchError::AddendaRecordIndicator,
        AchError::BatchNumberOutOfOrder(3),
    ];

    for error in errors {
        let _as_trait_object: &dyn Error = &error;
        let message = format!("{error}");
        assert!(!message.is_empty());
        let debug = format!("{error:?}");
        assert!(!debug.is_empty());
    }
}

#[test]
fn invalid_number_error_preserves_the_parse_source() {
    // Amount field (positions 29..39) holds non-digit characters.
    let bad_line = "62212345678011232132         00000000XX               ALICE WANDERDUST        1123456780000001";
    match EntryDetail::parse(bad_line) {
        Err(AchError::InvalidNumber { field, source }) => {
            assert_eq!(field, "Amount");
            assert!(!format!("{source}").is_empty());
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn error_messages_are_descriptive() {
    let err = AchError::InvalidLineLength(50);
    let msg = format!("{err}");
    assert!(msg.contains("94"));
    assert!(msg.contains("50"));

    let err = AchError::InvalidRecordType("X".to_string());
    assert!(format!("{err}").contains('X'));

    let err = AchError::InvalidStructure("missing file control record".to_string());
    assert!(format!("{err}").contains("missing file control record"));

    let err = AchError::BatchServiceClassTranCode {
        service_class: 225,
        transaction_code: 22,
    };
    let msg = format!("{err}");
    assert!(msg.contains("225"));
    assert!(msg.contains("22"));

    let err = AchError::AggregateMismatch {
        field: "FileControl.EntryHash",
        declared: 5,
        computed: 7,
    };
    let msg = format!("{err}");
    assert!(msg.contains('5'));
    assert!(msg.contains('7'));
}

#[test]
fn empty_content_produces_empty_file_error() {
    assert!(matches!(reader::read_str(""), Err(AchError::EmptyFile)));
}

#[test]
fn short_content_produces_invalid_line_length() {
    match reader::read_str("101 123") {
        Err(AchError::InvalidLineLength(len)) => assert_eq!(len, 7),
        other => panic!("expected InvalidLineLength, got {other:?}"),
    }
}

#[test]
fn unknown_record_type_is_rejected() {
    let line = "X".repeat(94) + "\n";
    assert!(reader::read_str(&line).is_err());
}

#[test]
fn incomplete_batch_without_file_control_is_rejected() {
    let fh = ach_core::FileHeader {
        immediate_destination: "123456780".to_string(),
        immediate_origin: "1234567801".to_string(),
        file_creation_date: "140903".to_string(),
        file_creation_time: "0123".to_string(),
        ..Default::default()
    };
    let content = format!("{}\n", fh.to_line().unwrap());
    assert!(reader::read_str(&content).is_err());
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AchError>();
    assert_sync::<AchError>();
}

#[test]
fn error_can_be_boxed() {
    let error: AchError = AchError::EmptyFile;
    let _boxed: Box<dyn Error> = Box::new(error);
}

#[test]
fn identical_variants_format_identically() {
    let err1 = AchError::EmptyFile;
    let err2 = AchError::EmptyFile;
    assert_eq!(format!("{err1:?}"), format!("{err2:?}"));
}
