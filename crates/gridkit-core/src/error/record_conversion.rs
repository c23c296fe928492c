use super::Error;
use crate::{FieldSchema, JsonMap};

/// Every field error raised while reading a single record.
///
/// The record read is all-or-nothing: one of these is returned in place of
/// the record whenever any field failed, and it always holds the complete
/// list of failures rather than the first one.
#[derive(Debug)]
pub struct RecordConversionError {
    raw: JsonMap,
    fields: Vec<FieldSchema>,
    errors: Vec<Error>,
}

impl RecordConversionError {
    /// The wire field mapping that failed to convert.
    pub fn raw(&self) -> &JsonMap {
        &self.raw
    }

    /// The field schema the conversion ran against.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Per-field errors, in the order they were encountered.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl std::error::Error for RecordConversionError {}

impl core::fmt::Display for RecordConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to convert record ({} field error{})",
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" }
        )?;

        let mut s = ": ";
        for err in &self.errors {
            write!(f, "{s}{err}")?;
            s = "; ";
        }
        Ok(())
    }
}

impl Error {
    /// Creates a composite record conversion error.
    pub fn record_conversion(raw: JsonMap, fields: &[FieldSchema], errors: Vec<Error>) -> Error {
        Error::from(super::ErrorKind::RecordConversion(RecordConversionError {
            raw,
            fields: fields.to_vec(),
            errors,
        }))
    }

    /// Returns `true` if this error is a composite record conversion error.
    pub fn is_record_conversion(&self) -> bool {
        self.as_record_conversion().is_some()
    }

    pub fn as_record_conversion(&self) -> Option<&RecordConversionError> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::RecordConversion(err) => Some(err),
            _ => None,
        })
    }
}
