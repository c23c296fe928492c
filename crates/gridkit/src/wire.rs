//! Request and response bodies of the records API.

use crate::{Error, Json, JsonMap, Record, Result};

use chrono::{DateTime, Utc};
use gridkit_core::{FieldSchema, UnexpectedFieldPolicy};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A record as sent in create, update and upsert requests.
#[derive(Debug, Serialize)]
pub(crate) struct OutgoingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    pub(crate) fields: JsonMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WriteRequest {
    pub(crate) records: Vec<OutgoingRecord>,
    pub(crate) return_fields_by_field_id: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) typecast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) perform_upsert: Option<PerformUpsert>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PerformUpsert {
    pub(crate) fields_to_merge_on: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRecord {
    pub(crate) id: String,
    pub(crate) created_time: DateTime<Utc>,
    #[serde(default)]
    pub(crate) fields: JsonMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordList {
    pub(crate) records: Vec<WireRecord>,
    #[serde(default)]
    pub(crate) offset: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsertResponse {
    pub(crate) records: Vec<WireRecord>,
    #[serde(default)]
    pub(crate) created_records: Vec<String>,
    #[serde(default)]
    pub(crate) updated_records: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub(crate) records: Vec<crate::DeletedRecord>,
}

impl OutgoingRecord {
    pub(crate) fn new(fields: JsonMap) -> OutgoingRecord {
        OutgoingRecord { id: None, fields }
    }

    pub(crate) fn with_id(id: String, fields: JsonMap) -> OutgoingRecord {
        OutgoingRecord {
            id: Some(id),
            fields,
        }
    }
}

impl WriteRequest {
    pub(crate) fn new(records: Vec<OutgoingRecord>) -> WriteRequest {
        WriteRequest {
            records,
            return_fields_by_field_id: true,
            typecast: None,
            perform_upsert: None,
        }
    }

    pub(crate) fn into_json(self) -> Result<Json> {
        Ok(serde_json::to_value(self)?)
    }
}

impl WireRecord {
    pub(crate) fn into_record(
        self,
        fields: &[FieldSchema],
        policy: &UnexpectedFieldPolicy,
    ) -> Result<Record> {
        Record::from_wire(self.id, self.created_time, &self.fields, fields, policy)
    }
}

/// Decodes a response body, turning an `{error: ...}` envelope into an API
/// error.
pub(crate) fn decode<T: DeserializeOwned>(body: Json) -> Result<T> {
    if body.get("error").is_some() {
        return Err(Error::api(body));
    }

    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_becomes_api_error() {
        let body = json!({"error": {"type": "INVALID_FILTER_BY_FORMULA"}});
        let err = decode::<RecordList>(body.clone()).unwrap_err();

        let api = err.as_api().unwrap();
        assert_eq!(api.error_type(), "INVALID_FILTER_BY_FORMULA");
        assert_eq!(api.envelope(), &body);
    }

    #[test]
    fn mismatched_shape_is_invalid_response() {
        let err = decode::<RecordList>(json!({"rows": []})).unwrap_err();
        assert!(err.is_invalid_response());
    }

    #[test]
    fn write_request_shape() {
        let mut request = WriteRequest::new(vec![OutgoingRecord::with_id(
            "rec1".to_string(),
            JsonMap::new(),
        )]);
        request.typecast = Some(true);

        assert_eq!(
            request.into_json().unwrap(),
            json!({
                "records": [{"id": "rec1", "fields": {}}],
                "returnFieldsByFieldId": true,
                "typecast": true,
            })
        );
    }
}
