use super::Error;
use crate::FieldSchema;

/// Error when a field the remote system always populates is absent from a
/// record. This usually means the field was deleted upstream.
#[derive(Debug)]
pub(super) struct MissingRequiredValue {
    field: FieldSchema,
}

impl std::error::Error for MissingRequiredValue {}

impl core::fmt::Display for MissingRequiredValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing value for always-present field `{}` ({}) of type {}",
            self.field.name, self.field.id, self.field.kind
        )
    }
}

impl Error {
    /// Creates a missing required value error for the given field.
    pub fn missing_required_value(field: &FieldSchema) -> Error {
        Error::from(super::ErrorKind::MissingRequiredValue(MissingRequiredValue {
            field: field.clone(),
        }))
    }

    /// Returns `true` if this error is a missing required value error.
    pub fn is_missing_required_value(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::MissingRequiredValue(_)))
    }
}
