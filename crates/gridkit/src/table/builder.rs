use super::{segment, Table};
use crate::{FieldSchema, Result, Transport};

use gridkit_core::{bail, UnexpectedFieldPolicy};
use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    transport: Arc<dyn Transport>,

    base_id: String,

    /// Table id or name
    table: String,

    /// Field schema used for every conversion
    fields: Vec<FieldSchema>,

    /// What reads do with wire fields missing from `fields`
    unexpected_fields: UnexpectedFieldPolicy,
}

impl Builder {
    pub(super) fn new(transport: Arc<dyn Transport>, base_id: String, table: String) -> Builder {
        Builder {
            transport,
            base_id,
            table,
            fields: vec![],
            unexpected_fields: UnexpectedFieldPolicy::default(),
        }
    }

    /// Sets the table's field schema, replacing any set before.
    pub fn fields(&mut self, fields: impl IntoIterator<Item = FieldSchema>) -> &mut Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn unexpected_fields(&mut self, policy: UnexpectedFieldPolicy) -> &mut Self {
        self.unexpected_fields = policy;
        self
    }

    pub fn build(&self) -> Result<Table> {
        if self.base_id.is_empty() {
            bail!("base id must not be empty");
        }

        if self.table.is_empty() {
            bail!("table id or name must not be empty");
        }

        Ok(Table {
            transport: self.transport.clone(),
            path: format!("{}/{}", segment(&self.base_id), segment(&self.table)),
            fields: self.fields.iter().cloned().collect(),
            unexpected_fields: self.unexpected_fields,
        })
    }
}
