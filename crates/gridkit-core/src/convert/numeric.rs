use super::{shape, wire_shape};
use crate::{Error, FieldSchema, Json, Result, Value};

// Numbers pass through unchanged. Precision, currency symbols and duration
// formats are display concerns of the remote system.

pub(super) fn to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::I64(n) => Ok(Json::from(*n)),
        Value::F64(n) => serde_json::Number::from_f64(*n)
            .map(Json::Number)
            .ok_or_else(|| {
                Error::value_shape(
                    field,
                    Json::String(n.to_string()),
                    format!("number must be finite, got {n}"),
                )
            }),
        _ => Err(shape(field, value, "a number")),
    }
}

pub(super) fn from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::Null),
        Some(Json::Number(n)) => Ok(Value::from_number(n)),
        Some(other) => Err(wire_shape(field, other, "a number")),
    }
}
