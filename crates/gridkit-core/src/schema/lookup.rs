use super::{FieldSchema, SelectChoice};
use crate::{Error, Result};

use std::collections::HashMap;

/// Resolves a string that may be either a display name or a canonical id.
///
/// The index is built in two passes: every entry is inserted under its name
/// first, then under its id. Inserting ids last is what makes an id win when
/// some other entry's name happens to equal it.
struct NameOrIdIndex<'a, T> {
    entries: HashMap<&'a str, &'a T>,
}

impl<'a, T> NameOrIdIndex<'a, T> {
    fn build(
        items: &'a [T],
        name: impl Fn(&'a T) -> &'a str,
        id: impl Fn(&'a T) -> &'a str,
    ) -> Self {
        let mut entries = HashMap::with_capacity(items.len() * 2);

        for item in items {
            entries.insert(name(item), item);
        }

        for item in items {
            entries.insert(id(item), item);
        }

        NameOrIdIndex { entries }
    }

    fn get(&self, name_or_id: &str) -> Option<&'a T> {
        self.entries.get(name_or_id).copied()
    }
}

/// Field resolution by name or id, id taking precedence.
pub struct FieldLookup<'a> {
    fields: &'a [FieldSchema],
    index: NameOrIdIndex<'a, FieldSchema>,
}

impl<'a> FieldLookup<'a> {
    pub fn new(fields: &'a [FieldSchema]) -> FieldLookup<'a> {
        FieldLookup {
            fields,
            index: NameOrIdIndex::build(
                fields,
                |field| field.name.as_str(),
                |field| field.id.as_str(),
            ),
        }
    }

    pub fn get(&self, name_or_id: &str) -> Option<&'a FieldSchema> {
        self.index.get(name_or_id)
    }

    /// Like [`get`](Self::get), failing with an unknown field error that lists
    /// every known name and id.
    pub fn resolve(&self, name_or_id: &str) -> Result<&'a FieldSchema> {
        self.get(name_or_id)
            .ok_or_else(|| Error::unknown_field(name_or_id, self.fields))
    }

    pub fn fields(&self) -> &'a [FieldSchema] {
        self.fields
    }
}

/// Select choice resolution by name or id, id taking precedence.
pub struct ChoiceLookup<'a> {
    index: NameOrIdIndex<'a, SelectChoice>,
}

impl<'a> ChoiceLookup<'a> {
    pub fn new(choices: &'a [SelectChoice]) -> ChoiceLookup<'a> {
        ChoiceLookup {
            index: NameOrIdIndex::build(
                choices,
                |choice| choice.name.as_str(),
                |choice| choice.id.as_str(),
            ),
        }
    }

    pub fn get(&self, name_or_id: &str) -> Option<&'a SelectChoice> {
        self.index.get(name_or_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    #[test]
    fn id_wins_over_colliding_name() {
        // The second field's name is the first field's id.
        let fields = vec![
            FieldSchema::new("fldA", "Title", FieldKind::SingleLineText),
            FieldSchema::new("fldB", "fldA", FieldKind::SingleLineText),
        ];
        let lookup = FieldLookup::new(&fields);

        assert_eq!(lookup.get("fldA").unwrap().id, "fldA");
        assert_eq!(lookup.get("Title").unwrap().id, "fldA");
        assert_eq!(lookup.get("fldB").unwrap().id, "fldB");
    }

    #[test]
    fn unresolved_lists_names_and_ids() {
        let fields = vec![FieldSchema::new("fld1", "Name", FieldKind::SingleLineText)];
        let err = FieldLookup::new(&fields).resolve("Nmae").unwrap_err();

        assert!(err.is_unknown_field());
        assert_eq!(
            err.to_string(),
            "unknown field `Nmae`; known fields: Name (fld1)"
        );
    }

    #[test]
    fn choice_id_wins_over_colliding_name() {
        let choices = vec![
            SelectChoice::new("selX", "Open"),
            SelectChoice::new("selY", "selX"),
        ];
        let lookup = ChoiceLookup::new(&choices);

        assert_eq!(lookup.get("selX").unwrap().name, "Open");
        assert_eq!(lookup.get("Open").unwrap().id, "selX");
    }
}
