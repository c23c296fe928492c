use super::FieldInput;
use crate::{schema::FieldLookup, Error, FieldSchema, JsonMap, Result, Value};

use std::collections::HashSet;

/// Which write request the fields are being prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Null and undefined are both omitted from the payload.
    Create,

    /// Undefined is omitted, null is sent to clear the field.
    Update,
}

/// Converts caller field values into a wire field mapping keyed by field id.
///
/// Validation happens before anything is sent: the first unknown field,
/// non-writable field or malformed value fails the whole record, as does
/// setting the same field twice (once by name and once by id).
pub fn to_wire(input: &FieldInput, fields: &[FieldSchema], mode: WriteMode) -> Result<JsonMap> {
    let lookup = FieldLookup::new(fields);
    let mut wire = JsonMap::new();
    let mut seen = HashSet::new();

    for (name_or_id, value) in input.iter() {
        let Some(value) = value else {
            continue;
        };

        let field = lookup.resolve(name_or_id)?;
        let converter = field.converter();

        if !converter.writable {
            return Err(Error::not_writable(field));
        }

        if !seen.insert(field.id.as_str()) {
            return Err(Error::value_shape(
                field,
                value.to_json(),
                "field is set more than once, by name and by id",
            ));
        }

        if mode == WriteMode::Create && matches!(value, Value::Null) {
            continue;
        }

        wire.insert(field.id.clone(), converter.to_wire(value, field)?);
    }

    Ok(wire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;
    use serde_json::json;

    fn fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema::new("fldName", "Name", FieldKind::SingleLineText),
            FieldSchema::new("fldNotes", "Notes", FieldKind::MultilineText),
            FieldSchema::new("fldTotal", "Total", FieldKind::Formula),
        ]
    }

    #[test]
    fn create_drops_null_and_undefined() {
        let input = FieldInput::new()
            .set("Name", "Ada")
            .clear("Notes")
            .undefined("fldTotal");

        let wire = to_wire(&input, &fields(), WriteMode::Create).unwrap();
        assert_eq!(json!(wire), json!({"fldName": "Ada"}));
    }

    #[test]
    fn update_keeps_null_and_drops_undefined() {
        let input = FieldInput::new().clear("Notes").undefined("Name");

        let wire = to_wire(&input, &fields(), WriteMode::Update).unwrap();
        assert_eq!(json!(wire), json!({"fldNotes": null}));
    }

    #[test]
    fn non_writable_field_fails_the_record() {
        let input = FieldInput::new().set("Name", "Ada").set("Total", 3);

        let err = to_wire(&input, &fields(), WriteMode::Update).unwrap_err();
        assert!(err.is_not_writable());
    }

    #[test]
    fn same_field_by_name_and_id_fails_the_record() {
        let input = FieldInput::new().set("Name", "Ada").set("fldName", "Grace");

        let err = to_wire(&input, &fields(), WriteMode::Update).unwrap_err();
        assert!(err.is_value_shape());
        assert_eq!(err.offending_value(), Some(&json!("Grace")));
    }

    #[test]
    fn undefined_alias_does_not_count_as_a_second_write() {
        let input = FieldInput::new().set("Name", "Ada").undefined("fldName");

        let wire = to_wire(&input, &fields(), WriteMode::Create).unwrap();
        assert_eq!(json!(wire), json!({"fldName": "Ada"}));
    }
}
