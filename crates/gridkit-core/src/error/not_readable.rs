use super::Error;
use crate::{FieldKind, FieldSchema};

/// Error when the wire value of a field cannot be read because the field's
/// kind has no read conversion.
#[derive(Debug)]
pub(super) struct NotReadable {
    field_id: Box<str>,
    field_name: Box<str>,
    kind: FieldKind,
}

impl std::error::Error for NotReadable {}

impl core::fmt::Display for NotReadable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` ({}) of type {} is not readable",
            self.field_name, self.field_id, self.kind
        )
    }
}

impl Error {
    /// Creates a not readable error for the given field.
    pub fn not_readable(field: &FieldSchema) -> Error {
        Error::from(super::ErrorKind::NotReadable(NotReadable {
            field_id: field.id.as_str().into(),
            field_name: field.name.as_str().into(),
            kind: field.kind,
        }))
    }

    /// Returns `true` if this error is a not readable error.
    pub fn is_not_readable(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::NotReadable(_)))
    }
}
