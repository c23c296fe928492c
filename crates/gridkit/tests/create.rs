mod support;
use support::*;

use gridkit::{Error, FieldInput, Method, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

fn named(n: usize) -> FieldInput {
    FieldInput::new().set("Name", n.to_string())
}

#[tokio::test]
async fn create_splits_into_chunks_of_ten() {
    let transport = MockTransport::echo();
    let table = table(&transport);

    let records = table.create((0..25).map(named).collect()).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);

    let mut sizes = requests
        .iter()
        .map(|request| request.body.as_ref().unwrap()["records"].as_array().unwrap().len())
        .collect::<Vec<_>>();
    sizes.sort();
    assert_eq!(sizes, [5, 10, 10]);

    for request in &requests {
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "appBase/Tasks");
        assert_eq!(request.body.as_ref().unwrap()["returnFieldsByFieldId"], json!(true));
    }

    let ids = records.iter().map(|record| record.id.as_str()).collect::<Vec<_>>();
    let expected = (0..25).map(|n| format!("rec{n}")).collect::<Vec<_>>();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn empty_create_sends_nothing() {
    let transport = MockTransport::echo();
    let records = table(&transport).create(vec![]).await.unwrap();

    assert!(records.is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn create_omits_unset_and_null_fields() {
    let transport = MockTransport::echo();
    let input = FieldInput::new()
        .set("Name", "a")
        .clear("Priority")
        .undefined("Done")
        .set("Status", "Done");

    let records = table(&transport).create(vec![input]).await.unwrap();

    assert_eq!(
        transport.requests()[0].body,
        Some(json!({
            "records": [{"fields": {"fldName": "a", "fldStatus": "selDone"}}],
            "returnFieldsByFieldId": true,
        }))
    );

    let record = &records[0];
    assert_eq!(record.id, "reca");
    assert_eq!(record.get("Name"), Some(&Value::from("a")));
    assert_eq!(record.get("Done"), Some(&Value::Bool(false)));
    assert_eq!(record.get("Priority"), Some(&Value::Null));
    assert_eq!(record.created_time.to_rfc3339(), "2024-05-01T09:30:00+00:00");
}

#[tokio::test]
async fn bad_record_fails_before_any_request() {
    let transport = MockTransport::echo();
    let mut records = (0..20).map(named).collect::<Vec<_>>();
    records[15] = FieldInput::new().set("Nmae", "typo");

    let err = table(&transport).create(records).await.unwrap_err();

    assert!(err.is_unknown_field());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn writing_computed_field_fails() {
    let transport = MockTransport::echo();
    let table = gridkit::Table::builder(transport.clone(), "appBase", "Tasks")
        .fields([gridkit::FieldSchema::new(
            "fldTotal",
            "Total",
            gridkit::FieldKind::Formula,
        )])
        .build()
        .unwrap();

    let err = table
        .create(vec![FieldInput::new().set("Total", 3)])
        .await
        .unwrap_err();

    assert!(err.is_not_writable());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn error_envelope_becomes_api_error() {
    let envelope = json!({
        "error": {"type": "INVALID_MULTIPLE_CHOICE_OPTIONS", "message": "Insufficient permissions"}
    });
    let response = envelope.clone();
    let transport = MockTransport::new(move |_| Ok(response.clone()));

    let err = table(&transport).create(vec![named(1)]).await.unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.error_type(), "INVALID_MULTIPLE_CHOICE_OPTIONS");
    assert_eq!(api.message(), Some("Insufficient permissions"));
    assert_eq!(api.envelope(), &envelope);
}

#[tokio::test]
async fn transport_failure_in_one_chunk_fails_the_batch() {
    let transport = MockTransport::new(|request| {
        let first = &request.body.as_ref().unwrap()["records"][0]["fields"]["fldName"];
        if first == "10" {
            Err(Error::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )))
        } else {
            Ok(echo_records(request))
        }
    });

    let err = table(&transport)
        .create((0..25).map(named).collect())
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.to_string(), "connection reset");
}
