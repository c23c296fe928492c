use gridkit_core::{convert, FieldKind, FieldSchema, SelectChoice, Value};
use serde_json::json;

fn field(kind: FieldKind) -> FieldSchema {
    FieldSchema::new("fldX", "X", kind)
}

fn status() -> FieldSchema {
    FieldSchema::new("fldStatus", "Status", FieldKind::SingleSelect).with_choices([
        SelectChoice::new("selTodo", "Todo"),
        SelectChoice::new("selDone", "Done").with_color("greenBright"),
    ])
}

#[test]
fn read_only_kinds_reject_every_write() {
    let read_only = [
        FieldKind::AutoNumber,
        FieldKind::Formula,
        FieldKind::Rollup,
        FieldKind::Lookup,
        FieldKind::MultipleLookupValues,
        FieldKind::Count,
        FieldKind::CreatedTime,
        FieldKind::LastModifiedTime,
        FieldKind::CreatedBy,
        FieldKind::LastModifiedBy,
        FieldKind::Button,
        FieldKind::AiText,
        FieldKind::ExternalSyncSource,
        FieldKind::Unknown,
    ];

    let inputs = [
        Value::Null,
        Value::from("text"),
        Value::from(1),
        Value::from(true),
        Value::empty_list(),
    ];

    for kind in read_only {
        assert!(!field(kind).is_writable(), "{kind} should not be writable");
        for input in &inputs {
            let err = convert::to_wire(input, &field(kind)).unwrap_err();
            assert!(err.is_not_writable(), "{kind}: {err}");
        }
    }
}

#[test]
fn writable_kinds() {
    for kind in FieldKind::ALL {
        let writable = convert::converter(kind).writable;
        let expected = !matches!(
            kind,
            FieldKind::AutoNumber
                | FieldKind::Formula
                | FieldKind::Rollup
                | FieldKind::Lookup
                | FieldKind::MultipleLookupValues
                | FieldKind::Count
                | FieldKind::CreatedTime
                | FieldKind::LastModifiedTime
                | FieldKind::CreatedBy
                | FieldKind::LastModifiedBy
                | FieldKind::Button
                | FieldKind::AiText
                | FieldKind::ExternalSyncSource
        );
        assert_eq!(writable, expected, "{kind}");
    }
}

#[test]
fn select_accepts_id_or_name() {
    let field = status();

    let by_id = convert::to_wire(&Value::from("selDone"), &field).unwrap();
    let by_name = convert::to_wire(&Value::from("Done"), &field).unwrap();

    assert_eq!(by_id, json!("selDone"));
    assert_eq!(by_name, json!("selDone"));
}

#[test]
fn select_unmatched_lists_every_choice() {
    let err = convert::to_wire(&Value::from("Blocked"), &status()).unwrap_err();

    assert!(err.is_value_shape());
    assert_eq!(err.offending_value(), Some(&json!("Blocked")));

    let message = err.to_string();
    for expected in ["selTodo", "Todo", "selDone", "Done"] {
        assert!(message.contains(expected), "missing {expected}: {message}");
    }
}

#[test]
fn multiple_selects_resolve_each_item() {
    let field = FieldSchema::new("fldTags", "Tags", FieldKind::MultipleSelects).with_choices([
        SelectChoice::new("selA", "Alpha"),
        SelectChoice::new("selB", "Beta"),
    ]);

    let wire = convert::to_wire(&Value::from(vec!["Alpha", "selB"]), &field).unwrap();
    assert_eq!(wire, json!(["selA", "selB"]));

    let wire = convert::to_wire(&Value::Null, &field).unwrap();
    assert_eq!(wire, json!([]));

    let err = convert::to_wire(&Value::from(vec!["Gamma"]), &field).unwrap_err();
    assert!(err.is_value_shape());
}

#[test]
fn date_accepts_timestamp_or_string() {
    use chrono::{NaiveDate, TimeZone, Utc};

    let date = field(FieldKind::Date);
    let instant = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();

    assert_eq!(
        convert::to_wire(&Value::from(instant), &date).unwrap(),
        json!("2024-03-09")
    );
    assert_eq!(
        convert::to_wire(&Value::from(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()), &date)
            .unwrap(),
        json!("2024-03-09")
    );
    assert_eq!(
        convert::to_wire(&Value::from("2024-03-09"), &date).unwrap(),
        json!("2024-03-09")
    );

    let datetime = field(FieldKind::DateTime);
    assert_eq!(
        convert::to_wire(&Value::from(instant), &datetime).unwrap(),
        json!("2024-03-09T23:30:00.000Z")
    );
}

#[test]
fn numeric_kinds_pass_through() {
    for kind in [
        FieldKind::Number,
        FieldKind::Percent,
        FieldKind::Currency,
        FieldKind::Duration,
        FieldKind::Rating,
    ] {
        assert_eq!(convert::to_wire(&Value::from(42), &field(kind)).unwrap(), json!(42));
        assert_eq!(
            convert::to_wire(&Value::from(0.5), &field(kind)).unwrap(),
            json!(0.5)
        );
        assert_eq!(convert::to_wire(&Value::Null, &field(kind)).unwrap(), json!(null));
    }
}

#[test]
fn non_finite_numbers_report_the_value() {
    let number = field(FieldKind::Number);

    let err = convert::to_wire(&Value::F64(f64::NAN), &number).unwrap_err();
    assert!(err.is_value_shape());
    assert_eq!(err.offending_value(), Some(&json!("NaN")));
    assert!(err.to_string().contains("got NaN"), "{err}");

    let err = convert::to_wire(&Value::F64(f64::INFINITY), &number).unwrap_err();
    assert_eq!(err.offending_value(), Some(&json!("inf")));
}

#[test]
fn wrong_shape_is_rejected() {
    let err = convert::to_wire(&Value::from(3), &field(FieldKind::Email)).unwrap_err();
    assert!(err.is_value_shape());

    let err = convert::to_wire(&Value::from("yes"), &field(FieldKind::Checkbox)).unwrap_err();
    assert!(err.is_value_shape());

    let err = convert::to_wire(&Value::from(vec![1]), &field(FieldKind::MultipleRecordLinks))
        .unwrap_err();
    assert!(err.is_value_shape());
}

#[test]
fn collections_write_null_as_empty_list() {
    for kind in [
        FieldKind::MultipleRecordLinks,
        FieldKind::MultipleCollaborators,
        FieldKind::MultipleAttachments,
    ] {
        assert_eq!(convert::to_wire(&Value::Null, &field(kind)).unwrap(), json!([]));
    }
}
