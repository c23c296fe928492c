use super::{shape, wire_shape};
use crate::{schema::ChoiceLookup, Error, FieldSchema, Json, Result, Value};

/// Resolves a choice name or id to the canonical choice id.
fn resolve(lookup: &ChoiceLookup<'_>, value: &Value, field: &FieldSchema) -> Result<Json> {
    let Value::String(name_or_id) = value else {
        return Err(shape(field, value, "a choice name or id"));
    };

    match lookup.get(name_or_id) {
        Some(choice) => Ok(Json::String(choice.id.clone())),
        None => {
            let valid = field
                .choices()
                .iter()
                .map(|choice| format!("{} ({})", choice.id, choice.name))
                .collect::<Vec<_>>();

            Err(Error::value_shape(
                field,
                value.to_json(),
                format!(
                    "no choice matches `{name_or_id}`; valid choices are: {}",
                    valid.join(", ")
                ),
            ))
        }
    }
}

pub(super) fn single_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    if value.is_null() {
        return Ok(Json::Null);
    }

    resolve(&ChoiceLookup::new(field.choices()), value, field)
}

pub(super) fn multiple_to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Array(vec![])),
        Value::List(items) => {
            let lookup = ChoiceLookup::new(field.choices());
            items
                .iter()
                .map(|item| resolve(&lookup, item, field))
                .collect::<Result<Vec<_>>>()
                .map(Json::Array)
        }
        _ => Err(shape(field, value, "a list of choice names or ids")),
    }
}

// Reads hand back whatever choice identity the remote system stored. Which
// one that is depends on the request's cell format, so it is not re-resolved.

pub(super) fn single_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::Null),
        Some(Json::String(choice)) => Ok(Value::String(choice.clone())),
        Some(other) => Err(wire_shape(field, other, "a choice")),
    }
}

pub(super) fn multiple_from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    match wire {
        None | Some(Json::Null) => Ok(Value::empty_list()),
        Some(Json::Array(choices)) => choices
            .iter()
            .map(|choice| match choice {
                Json::String(choice) => Ok(Value::String(choice.clone())),
                other => Err(wire_shape(field, other, "a choice")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        Some(other) => Err(wire_shape(field, other, "a list of choices")),
    }
}
