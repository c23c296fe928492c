use super::{shape, wire_shape};
use crate::{FieldSchema, Json, Result, Value};

/// Single structured values: one collaborator, a barcode.
pub(super) fn object_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::Object(map) => Ok(Json::Object(map.clone())),
        _ => Err(shape(field, value, "an object")),
    }
}

pub(super) fn object_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::Null),
        Some(Json::Object(map)) => Ok(Value::Object(map.clone())),
        Some(other) => Err(wire_shape(field, other, "an object")),
    }
}

/// Record links are written as a list of record ids.
pub(super) fn links_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Array(vec![])),
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::String(id) => Ok(Json::String(id.clone())),
                _ => Err(shape(field, item, "a record id")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Json::Array),
        _ => Err(shape(field, value, "a list of record ids")),
    }
}

/// Collaborators and attachments are written as a list of objects.
pub(super) fn objects_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Array(vec![])),
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(Json::Object(map.clone())),
                _ => Err(shape(field, item, "an object")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Json::Array),
        _ => Err(shape(field, value, "a list of objects")),
    }
}

/// Every multi-valued kind reads absent or null as an empty list.
pub(super) fn list_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::empty_list()),
        Some(Json::Array(items)) => Ok(Value::List(items.iter().map(Value::from_json).collect())),
        Some(other) => Err(wire_shape(field, other, "a list")),
    }
}
