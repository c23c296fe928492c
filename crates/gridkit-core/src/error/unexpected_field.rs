use super::Error;
use crate::Json;

/// Error when a wire record carries a field id that is not in the schema.
#[derive(Debug)]
pub(super) struct UnexpectedField {
    field_id: Box<str>,
    value: Json,
}

impl std::error::Error for UnexpectedField {}

impl core::fmt::Display for UnexpectedField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unexpected field `{}` with value {}",
            self.field_id, self.value
        )
    }
}

impl Error {
    /// Creates an unexpected field error for a wire key with no schema entry.
    pub fn unexpected_field(field_id: impl Into<String>, value: Json) -> Error {
        Error::from(super::ErrorKind::UnexpectedField(UnexpectedField {
            field_id: field_id.into().into(),
            value,
        }))
    }

    /// Returns `true` if this error is an unexpected field error.
    pub fn is_unexpected_field(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnexpectedField(_)))
    }

    /// The wire id of the unexpected field, if this is an unexpected field
    /// error.
    pub fn unexpected_field_id(&self) -> Option<&str> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::UnexpectedField(err) => Some(&*err.field_id),
            _ => None,
        })
    }
}
