mod input;
pub use input::FieldInput;

mod policy;
pub use policy::UnexpectedFieldPolicy;

mod read;
pub use read::from_wire;

mod write;
pub use write::{to_wire, WriteMode};

use crate::{FieldSchema, JsonMap, Result, Value};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A record read from the remote system.
///
/// Records are never cached: every read produces a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identifier assigned by the remote system
    pub id: String,

    pub created_time: DateTime<Utc>,

    /// Field values keyed by current field name. Unexpected fields kept by
    /// the read policy are keyed by their wire id.
    pub fields: IndexMap<String, Value>,
}

impl Record {
    /// Builds a record from its wire parts, converting every field.
    pub fn from_wire(
        id: String,
        created_time: DateTime<Utc>,
        raw: &JsonMap,
        fields: &[FieldSchema],
        policy: &UnexpectedFieldPolicy,
    ) -> Result<Record> {
        Ok(Record {
            id,
            created_time,
            fields: from_wire(raw, fields, policy)?,
        })
    }

    /// The value of a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
