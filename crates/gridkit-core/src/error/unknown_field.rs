use super::Error;
use crate::FieldSchema;

/// Error when a caller-supplied field name or id matches no field.
#[derive(Debug)]
pub(super) struct UnknownField {
    attempted: Box<str>,
    known: Box<[String]>,
}

impl std::error::Error for UnknownField {}

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown field `{}`; known fields: {}",
            self.attempted,
            self.known.join(", ")
        )
    }
}

impl Error {
    /// Creates an unknown field error listing every known name and id.
    pub fn unknown_field(attempted: impl Into<String>, fields: &[FieldSchema]) -> Error {
        let known = fields
            .iter()
            .map(|field| format!("{} ({})", field.name, field.id))
            .collect::<Vec<_>>();

        Error::from(super::ErrorKind::UnknownField(UnknownField {
            attempted: attempted.into().into(),
            known: known.into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnknownField(_)))
    }
}
