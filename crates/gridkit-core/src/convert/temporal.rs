use super::{shape, wire_shape};
use crate::{
    value::{format_date, format_datetime},
    FieldSchema, Json, Result, Value,
};

use chrono::{DateTime, NaiveTime, Utc};

pub(super) fn date_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::String(formatted) => Ok(Json::String(formatted.clone())),
        Value::Date(date) => Ok(Json::String(format_date(date))),
        Value::DateTime(instant) => Ok(Json::String(format_date(&instant.date_naive()))),
        _ => Err(shape(field, value, "a date or a formatted date string")),
    }
}

pub(super) fn datetime_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::String(formatted) => Ok(Json::String(formatted.clone())),
        Value::DateTime(instant) => Ok(Json::String(format_datetime(instant))),
        Value::Date(date) => {
            let midnight = DateTime::<Utc>::from_naive_utc_and_offset(
                date.and_time(NaiveTime::MIN),
                Utc,
            );
            Ok(Json::String(format_datetime(&midnight)))
        }
        _ => Err(shape(field, value, "a timestamp or a formatted timestamp string")),
    }
}

/// The wire string is returned as-is. Interpreting it (time zone, cell
/// format) is left to the caller.
pub(super) fn from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::Null),
        Some(Json::String(formatted)) => Ok(Value::String(formatted.clone())),
        Some(other) => Err(wire_shape(field, other, "a date string")),
    }
}
