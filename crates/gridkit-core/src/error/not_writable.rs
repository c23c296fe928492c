use super::Error;
use crate::{FieldKind, FieldSchema};

/// Error when a value is written to a field the remote system computes or
/// manages itself.
#[derive(Debug)]
pub(super) struct NotWritable {
    field_id: Box<str>,
    field_name: Box<str>,
    kind: FieldKind,
}

impl std::error::Error for NotWritable {}

impl core::fmt::Display for NotWritable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` ({}) of type {} is not writable",
            self.field_name, self.field_id, self.kind
        )
    }
}

impl Error {
    /// Creates a not writable error for the given field.
    pub fn not_writable(field: &FieldSchema) -> Error {
        Error::from(super::ErrorKind::NotWritable(NotWritable {
            field_id: field.id.as_str().into(),
            field_name: field.name.as_str().into(),
            kind: field.kind,
        }))
    }

    /// Returns `true` if this error is a not writable error.
    pub fn is_not_writable(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::NotWritable(_)))
    }
}
