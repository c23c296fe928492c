use super::{FieldKind, FieldOptions, SelectChoice};
use crate::convert::{self, Converter};

use serde::{Deserialize, Serialize};

/// Describes one field of a table snapshot.
///
/// The shape matches the remote metadata API, so a list of fields can be
/// deserialized straight from a schema response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Stable identifier, unique within the table
    pub id: String,

    /// Display name. Not guaranteed to be unique.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default)]
    pub options: FieldOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSchema {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> FieldSchema {
        FieldSchema {
            id: id.into(),
            name: name.into(),
            kind,
            options: FieldOptions::default(),
            description: None,
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> FieldSchema {
        self.options = options;
        self
    }

    pub fn with_choices(self, choices: impl IntoIterator<Item = SelectChoice>) -> FieldSchema {
        self.with_options(FieldOptions::with_choices(choices))
    }

    /// Select choices, empty for non-select fields.
    pub fn choices(&self) -> &[SelectChoice] {
        &self.options.choices
    }

    /// The converter for this field's kind.
    pub fn converter(&self) -> Converter {
        convert::converter(self.kind)
    }

    pub fn is_readable(&self) -> bool {
        self.converter().readable
    }

    pub fn is_writable(&self) -> bool {
        self.converter().writable
    }
}
