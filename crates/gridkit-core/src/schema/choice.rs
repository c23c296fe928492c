use serde::{Deserialize, Serialize};

/// One choice of a single or multiple select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectChoice {
    /// Canonical identifier
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SelectChoice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> SelectChoice {
        SelectChoice {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> SelectChoice {
        self.color = Some(color.into());
        self
    }
}
