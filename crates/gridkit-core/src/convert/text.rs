use super::{shape, wire_shape};
use crate::{FieldSchema, Json, Result, Value};

pub(super) fn to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::String(text) => Ok(Json::String(text.clone())),
        _ => Err(shape(field, value, "a string")),
    }
}

pub(super) fn from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::Null),
        Some(Json::String(text)) => Ok(Value::String(text.clone())),
        Some(other) => Err(wire_shape(field, other, "a string")),
    }
}
