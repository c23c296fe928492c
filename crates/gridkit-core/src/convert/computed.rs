use super::wire_shape;
use crate::{Error, FieldSchema, Json, Result, Value};

/// Computed values whose shape depends on the computation (formula result,
/// rollup, AI output, button payload). Passed through uninterpreted.
pub(super) fn any_from_wire(wire: Option<&Json>, _field: &FieldSchema) -> Result<Value> {
    Ok(wire.map(Value::from_json).unwrap_or(Value::Null))
}

// The kinds below are always populated by the remote system. Absence means
// the field no longer exists upstream, so it is an error rather than a blank.

fn required<'a>(wire: Option<&'a Json>, field: &FieldSchema) -> Result<&'a Json> {
    match wire {
        None | Some(Json::Null) => Err(Error::missing_required_value(field)),
        Some(wire) => Ok(wire),
    }
}

pub(super) fn required_number_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match required(wire, field)? {
        Json::Number(n) => Ok(Value::from_number(n)),
        other => Err(wire_shape(field, other, "a number")),
    }
}

pub(super) fn required_string_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match required(wire, field)? {
        Json::String(formatted) => Ok(Value::String(formatted.clone())),
        other => Err(wire_shape(field, other, "a timestamp string")),
    }
}

pub(super) fn required_object_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match required(wire, field)? {
        Json::Object(map) => Ok(Value::Object(map.clone())),
        other => Err(wire_shape(field, other, "a collaborator object")),
    }
}
