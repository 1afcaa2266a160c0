//! Tests for the serialized snapshot contract.

use exception_info::ExceptionInfo;
use serde_json::json;

fn nested_snapshot() -> ExceptionInfo {
    ExceptionInfo::new(
        "serverError.scheduleUpdateFailed",
        Some("boom".into()),
        vec!["tenant-7".into(), "42".into()],
        Some("RuntimeFailure".into()),
        vec![
            "publish (src/roster.rs:88)".into(),
            "commit (src/store.rs:14)".into(),
            "main (src/main.rs:7)".into(),
        ],
        Some(ExceptionInfo {
            exception_message: Some("disk full".into()),
            ..ExceptionInfo::default()
        }),
    )
}

#[test]
fn serialized_field_names() {
    let expected = json!({
        "i18nKey": "serverError.scheduleUpdateFailed",
        "exceptionMessage": "boom",
        "messageParameters": ["tenant-7", "42"],
        "exceptionClass": "RuntimeFailure",
        "stackTrace": [
            "publish (src/roster.rs:88)",
            "commit (src/store.rs:14)",
            "main (src/main.rs:7)",
        ],
        "exceptionCause": {
            "i18nKey": "",
            "exceptionMessage": "disk full",
            "messageParameters": [],
            "stackTrace": [],
        },
    });
    assert_eq!(expected, serde_json::to_value(nested_snapshot()).unwrap());
}

#[test]
fn absent_optionals_are_omitted() {
    let expected = json!({
        "i18nKey": "",
        "messageParameters": [],
        "stackTrace": [],
    });
    assert_eq!(
        expected,
        serde_json::to_value(ExceptionInfo::default()).unwrap()
    );
}

#[test]
fn round_trip_preserves_all_fields() {
    let snapshot = nested_snapshot();
    let body = snapshot.to_json().unwrap();
    assert_eq!(snapshot, ExceptionInfo::from_json(&body).unwrap());
}

#[test]
fn round_trip_preserves_stack_order() {
    let snapshot = nested_snapshot();
    let decoded = ExceptionInfo::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(3, decoded.stack_trace.len());
    assert_eq!(snapshot.stack_trace, decoded.stack_trace);
}

#[test]
fn missing_arrays_deserialize_as_empty_sequences() {
    let snapshot = ExceptionInfo::from_json(r#"{"i18nKey":"key.x"}"#).unwrap();
    assert_eq!("key.x", snapshot.i18n_key);
    assert!(snapshot.message_parameters.is_empty());
    assert!(snapshot.stack_trace.is_empty());
    assert_eq!(None, snapshot.exception_cause);
}

#[test]
fn null_cause_deserializes_as_none() {
    let snapshot =
        ExceptionInfo::from_json(r#"{"i18nKey":"","exceptionCause":null}"#).unwrap();
    assert_eq!(None, snapshot.exception_cause);
}

#[test]
fn malformed_document_reports_decode_failure() {
    let err = ExceptionInfo::from_json("{").unwrap_err();
    assert!(err.to_string().starts_with("deserializing exception snapshot"));
}
