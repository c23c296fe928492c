//! Per-field-kind conversion between domain values and wire JSON.
//!
//! Every [`FieldKind`] maps to one [`Converter`] through a single exhaustive
//! match in [`converter`]. A kind that cannot be written has no `to_wire`
//! function; writing to it fails with a not writable error whatever the
//! input. The same holds for reading and `from_wire`.

mod checkbox;
mod collection;
mod computed;
mod numeric;
mod select;
mod temporal;
mod text;

use crate::{Error, FieldKind, FieldSchema, Json, Result, Value};

/// Converts a domain value to its wire form for the given field.
pub type ToWire = fn(&Value, &FieldSchema) -> Result<Json>;

/// Converts a wire value to its domain form for the given field. `None`
/// means the key was absent from the wire record.
pub type FromWire = fn(Option<&Json>, &FieldSchema) -> Result<Value>;

/// The conversion pair and capability flags of one field kind.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    pub readable: bool,
    pub writable: bool,
    to_wire: Option<ToWire>,
    from_wire: Option<FromWire>,
}

impl Converter {
    const fn read_write(to_wire: ToWire, from_wire: FromWire) -> Converter {
        Converter {
            readable: true,
            writable: true,
            to_wire: Some(to_wire),
            from_wire: Some(from_wire),
        }
    }

    const fn read_only(from_wire: FromWire) -> Converter {
        Converter {
            readable: true,
            writable: false,
            to_wire: None,
            from_wire: Some(from_wire),
        }
    }

    const fn opaque() -> Converter {
        Converter {
            readable: false,
            writable: false,
            to_wire: None,
            from_wire: None,
        }
    }

    pub fn to_wire(&self, value: &Value, field: &FieldSchema) -> Result<Json> {
        match self.to_wire {
            Some(to_wire) => to_wire(value, field),
            None => Err(Error::not_writable(field)),
        }
    }

    pub fn from_wire(&self, wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
        match self.from_wire {
            Some(from_wire) => from_wire(wire, field),
            None => Err(Error::not_readable(field)),
        }
    }
}

/// Returns the converter for a field kind.
pub fn converter(kind: FieldKind) -> Converter {
    use FieldKind::*;

    match kind {
        SingleLineText | Email | Url | MultilineText | PhoneNumber | RichText => {
            Converter::read_write(text::to_wire, text::from_wire)
        }
        Number | Percent | Currency | Duration | Rating => {
            Converter::read_write(numeric::to_wire, numeric::from_wire)
        }
        Checkbox => Converter::read_write(checkbox::to_wire, checkbox::from_wire),
        SingleSelect => Converter::read_write(select::single_to_wire, select::single_from_wire),
        MultipleSelects => {
            Converter::read_write(select::multiple_to_wire, select::multiple_from_wire)
        }
        SingleCollaborator | Barcode => {
            Converter::read_write(collection::object_to_wire, collection::object_from_wire)
        }
        MultipleRecordLinks => {
            Converter::read_write(collection::links_to_wire, collection::list_from_wire)
        }
        MultipleCollaborators | MultipleAttachments => {
            Converter::read_write(collection::objects_to_wire, collection::list_from_wire)
        }
        Date => Converter::read_write(temporal::date_to_wire, temporal::from_wire),
        DateTime => Converter::read_write(temporal::datetime_to_wire, temporal::from_wire),
        Formula | Rollup => Converter::read_only(computed::any_from_wire),
        AiText | Button | ExternalSyncSource => Converter::read_only(computed::any_from_wire),
        Lookup | MultipleLookupValues => Converter::read_only(collection::list_from_wire),
        AutoNumber | Count => Converter::read_only(computed::required_number_from_wire),
        CreatedTime | LastModifiedTime => {
            Converter::read_only(computed::required_string_from_wire)
        }
        CreatedBy | LastModifiedBy => Converter::read_only(computed::required_object_from_wire),
        Unknown => Converter::opaque(),
    }
}

/// Converts a domain value for writing to `field`.
pub fn to_wire(value: &Value, field: &FieldSchema) -> Result<Json> {
    converter(field.kind).to_wire(value, field)
}

/// Converts a wire value read from `field`.
pub fn from_wire(wire: Option<&Json>, field: &FieldSchema) -> Result<Value> {
    converter(field.kind).from_wire(wire, field)
}

fn shape(field: &FieldSchema, value: &Value, expected: &str) -> Error {
    Error::value_shape(
        field,
        value.to_json(),
        format!("expected {expected}, got {}", value.type_name()),
    )
}

fn wire_shape(field: &FieldSchema, wire: &Json, expected: &str) -> Error {
    Error::value_shape(field, wire.clone(), format!("expected {expected} on the wire"))
}
