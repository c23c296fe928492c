use super::UnexpectedFieldPolicy;
use crate::{err, Error, FieldSchema, JsonMap, Result, Value};

use indexmap::IndexMap;
use std::collections::HashMap;

/// Outcome of converting a record's fields, built up one field at a time.
#[derive(Default)]
struct Accumulator {
    values: IndexMap<String, Value>,
    errors: Vec<Error>,
}

impl Accumulator {
    fn push(mut self, field: &FieldSchema, result: Result<Value>) -> Accumulator {
        match result {
            Ok(value) => self.insert(&field.name, &field.id, value),
            Err(err) => self.errors.push(err),
        }
        self
    }

    /// Unexpected fields have no name, so they are keyed by id only.
    fn push_unexpected(mut self, id: &str, value: Value) -> Accumulator {
        self.insert(id, id, value);
        self
    }

    fn push_error(mut self, err: Error) -> Accumulator {
        self.errors.push(err);
        self
    }

    /// Keys the value by name, or by id when the name is already taken.
    fn insert(&mut self, name: &str, id: &str, value: Value) {
        let key = if !self.values.contains_key(name) {
            name
        } else if !self.values.contains_key(id) {
            id
        } else {
            self.errors
                .push(err!("field `{name}` ({id}) collides with another value key"));
            return;
        };

        self.values.insert(key.to_string(), value);
    }
}

/// Converts a wire field mapping keyed by field id into domain values keyed
/// by field name.
///
/// Every field is attempted, whatever fails along the way: first the keys
/// present on the wire, then each schema field the wire left out (which
/// either defaults or, for always-present kinds, fails as missing). Any
/// failure turns the whole read into one record conversion error carrying
/// every field error. A value whose name is already taken by an earlier
/// value is keyed by its field id instead. Fields of a kind that cannot be read are not
/// defaulted; they only fail the read when the wire actually carries them.
pub fn from_wire(
    raw: &JsonMap,
    fields: &[FieldSchema],
    policy: &UnexpectedFieldPolicy,
) -> Result<IndexMap<String, Value>> {
    let by_id = fields
        .iter()
        .map(|field| (field.id.as_str(), field))
        .collect::<HashMap<_, _>>();

    let acc = raw.iter().fold(Accumulator::default(), |acc, (id, wire)| {
        match by_id.get(id.as_str()) {
            Some(field) => {
                let value = field.converter().from_wire(Some(wire), field);
                acc.push(field, value)
            }
            None => match *policy {
                UnexpectedFieldPolicy::Throw => {
                    acc.push_error(Error::unexpected_field(id.as_str(), wire.clone()))
                }
                UnexpectedFieldPolicy::Tolerate { warn, keep } => {
                    if warn {
                        tracing::warn!(
                            field_id = %id,
                            "record has a field missing from the schema"
                        );
                    }

                    if keep {
                        acc.push_unexpected(id, Value::from_json(wire))
                    } else {
                        acc
                    }
                }
            },
        }
    });

    let acc = fields
        .iter()
        .filter(|field| field.is_readable() && !raw.contains_key(&field.id))
        .fold(acc, |acc, field| {
            acc.push(field, field.converter().from_wire(None, field))
        });

    if acc.errors.is_empty() {
        Ok(acc.values)
    } else {
        Err(Error::record_conversion(raw.clone(), fields, acc.errors))
    }
}
