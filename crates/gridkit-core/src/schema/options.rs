use super::SelectChoice;
use crate::JsonMap;

use serde::{Deserialize, Serialize};

/// Kind-specific field options.
///
/// Only the options the marshalling layer interprets are typed. Everything
/// else the metadata carries is kept in `other` untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    /// Ordered choices of a select field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<SelectChoice>,

    /// Number of decimal places of a numeric field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    /// Target table of a record link field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_table_id: Option<String>,

    #[serde(flatten)]
    pub other: JsonMap,
}

impl FieldOptions {
    pub fn with_choices(choices: impl IntoIterator<Item = SelectChoice>) -> FieldOptions {
        FieldOptions {
            choices: choices.into_iter().collect(),
            ..FieldOptions::default()
        }
    }
}
