use crate::Value;

use indexmap::IndexMap;

/// Field values to write, keyed by field name or id.
///
/// Each entry distinguishes *undefined* (`None`) from an explicit *null*
/// (`Some(Value::Null)`). Creates drop both. Updates drop undefined entries,
/// leaving the field untouched, and send null to clear the field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldInput {
    entries: IndexMap<String, Option<Value>>,
}

impl FieldInput {
    pub fn new() -> FieldInput {
        FieldInput::default()
    }

    /// Sets a field to a value.
    pub fn set(mut self, name_or_id: impl Into<String>, value: impl Into<Value>) -> FieldInput {
        self.entries.insert(name_or_id.into(), Some(value.into()));
        self
    }

    /// Explicitly clears a field.
    pub fn clear(mut self, name_or_id: impl Into<String>) -> FieldInput {
        self.entries.insert(name_or_id.into(), Some(Value::Null));
        self
    }

    /// Mentions a field without giving it a value.
    pub fn undefined(mut self, name_or_id: impl Into<String>) -> FieldInput {
        self.entries.insert(name_or_id.into(), None);
        self
    }

    pub fn insert(&mut self, name_or_id: impl Into<String>, value: Option<Value>) {
        self.entries.insert(name_or_id.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldInput
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldInput {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), Some(value.into())))
                .collect(),
        }
    }
}
