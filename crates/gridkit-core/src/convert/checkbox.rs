use super::{shape, wire_shape};
use crate::{FieldSchema, Json, Result, Value};

// A checkbox is never null. The remote system omits unchecked boxes from
// records entirely, so absence and null both read as `false`, and writing
// null clears the box.

pub(super) fn to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Bool(false)),
        Value::Bool(checked) => Ok(Json::Bool(*checked)),
        _ => Err(shape(field, value, "a bool")),
    }
}

pub(super) fn from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::Bool(false)),
        Some(Json::Bool(checked)) => Ok(Value::Bool(*checked)),
        Some(other) => Err(wire_shape(field, other, "a bool")),
    }
}
