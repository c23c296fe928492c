use super::Table;
use crate::{
    batch,
    wire::{self, OutgoingRecord, RecordList, WriteRequest},
    FieldInput, Method, Record, Result,
};

use gridkit_core::{record, WriteMode};

/// New field values for an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub id: String,
    pub fields: FieldInput,
}

/// How updates and upserts are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Replace the whole record (`PUT`), clearing every field not sent.
    /// By default only the fields sent are changed (`PATCH`).
    pub destructive: bool,

    /// Let the API coerce values, e.g. creating missing select choices.
    pub typecast: bool,
}

impl RecordUpdate {
    pub fn new(id: impl Into<String>, fields: FieldInput) -> RecordUpdate {
        RecordUpdate {
            id: id.into(),
            fields,
        }
    }
}

impl UpdateOptions {
    pub fn destructive(mut self) -> UpdateOptions {
        self.destructive = true;
        self
    }

    pub fn typecast(mut self) -> UpdateOptions {
        self.typecast = true;
        self
    }

    pub(super) fn method(&self) -> Method {
        if self.destructive {
            Method::Put
        } else {
            Method::Patch
        }
    }

    pub(super) fn apply(&self, mut request: WriteRequest) -> WriteRequest {
        request.typecast = self.typecast.then_some(true);
        request
    }
}

impl Table {
    /// Updates existing records.
    ///
    /// Unset fields are left untouched; fields set to null are cleared.
    pub async fn update(
        &self,
        updates: Vec<RecordUpdate>,
        options: UpdateOptions,
    ) -> Result<Vec<Record>> {
        let records = updates
            .into_iter()
            .map(|update| {
                let fields = record::to_wire(&update.fields, &self.fields, WriteMode::Update)?;
                Ok(OutgoingRecord::with_id(update.id, fields))
            })
            .collect::<Result<Vec<_>>>()?;

        batch::batched(records, |chunk| self.update_chunk(chunk, options)).await
    }

    async fn update_chunk(
        &self,
        records: Vec<OutgoingRecord>,
        options: UpdateOptions,
    ) -> Result<Vec<Record>> {
        let body = options.apply(WriteRequest::new(records)).into_json()?;
        let response = self.request(options.method(), &self.path, Some(body)).await?;
        let list: RecordList = wire::decode(response)?;
        self.to_records(list.records)
    }
}
