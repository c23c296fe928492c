use super::Error;
use crate::{FieldSchema, Json};

/// Error when a present value violates a kind-specific invariant, such as a
/// select value that matches none of the field's choices.
#[derive(Debug)]
pub(super) struct ValueShape {
    field: FieldSchema,
    value: Json,
    message: Box<str>,
}

impl std::error::Error for ValueShape {}

impl core::fmt::Display for ValueShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid value {} for field `{}` ({}) of type {}: {}",
            self.value, self.field.name, self.field.id, self.field.kind, self.message
        )
    }
}

impl Error {
    /// Creates a value shape error carrying the offending raw value and the
    /// field it was checked against.
    pub fn value_shape(field: &FieldSchema, value: Json, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ValueShape(ValueShape {
            field: field.clone(),
            value,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a value shape error.
    pub fn is_value_shape(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::ValueShape(_)))
    }

    /// The raw value that failed validation, if this is a value shape error.
    pub fn offending_value(&self) -> Option<&Json> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::ValueShape(err) => Some(&err.value),
            _ => None,
        })
    }
}
