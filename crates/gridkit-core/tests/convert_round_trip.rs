use gridkit_core::{convert, FieldKind, FieldSchema, JsonMap, SelectChoice, Value};
use serde_json::json;

fn round_trip(field: &FieldSchema, value: Value) {
    let wire = convert::to_wire(&value, field).unwrap();
    let back = convert::from_wire(Some(&wire), field).unwrap();
    assert_eq!(back, value, "{} via {wire}", field.kind);
}

fn object(json: serde_json::Value) -> Value {
    let serde_json::Value::Object(map) = json else {
        panic!("not an object: {json}");
    };
    Value::Object(map)
}

#[test]
fn writable_kinds_round_trip() {
    let text = FieldSchema::new("fld1", "Text", FieldKind::SingleLineText);
    round_trip(&text, Value::from("hello \"world\""));
    round_trip(&text, Value::Null);

    for kind in [FieldKind::Email, FieldKind::Url, FieldKind::PhoneNumber, FieldKind::RichText] {
        round_trip(&FieldSchema::new("fld1", "F", kind), Value::from("value"));
    }

    let number = FieldSchema::new("fld2", "Amount", FieldKind::Currency);
    round_trip(&number, Value::from(12));
    round_trip(&number, Value::from(12.75));
    round_trip(&number, Value::Null);

    let checkbox = FieldSchema::new("fld3", "Done", FieldKind::Checkbox);
    round_trip(&checkbox, Value::from(true));
    round_trip(&checkbox, Value::from(false));

    let select = FieldSchema::new("fld4", "Status", FieldKind::SingleSelect)
        .with_choices([SelectChoice::new("selA", "Open")]);
    round_trip(&select, Value::from("selA"));

    let tags = FieldSchema::new("fld5", "Tags", FieldKind::MultipleSelects)
        .with_choices([SelectChoice::new("selA", "A"), SelectChoice::new("selB", "B")]);
    round_trip(&tags, Value::from(vec!["selB", "selA"]));

    let links = FieldSchema::new("fld6", "Links", FieldKind::MultipleRecordLinks);
    round_trip(&links, Value::from(vec!["rec1", "rec2"]));
    round_trip(&links, Value::empty_list());

    let attachments = FieldSchema::new("fld7", "Files", FieldKind::MultipleAttachments);
    round_trip(
        &attachments,
        Value::List(vec![object(json!({"url": "https://example.com/a.png"}))]),
    );

    let owner = FieldSchema::new("fld8", "Owner", FieldKind::SingleCollaborator);
    round_trip(&owner, object(json!({"id": "usr1"})));

    let barcode = FieldSchema::new("fld9", "Code", FieldKind::Barcode);
    round_trip(&barcode, Value::Object(JsonMap::new()));

    let date = FieldSchema::new("fld10", "Due", FieldKind::Date);
    round_trip(&date, Value::from("2024-05-01"));

    let datetime = FieldSchema::new("fld11", "At", FieldKind::DateTime);
    round_trip(&datetime, Value::from("2024-05-01T10:00:00.000Z"));
}
