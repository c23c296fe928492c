use super::Table;
use crate::{
    batch,
    wire::{self, OutgoingRecord, RecordList, WriteRequest},
    FieldInput, Method, Record, Result,
};

use gridkit_core::{record, WriteMode};

impl Table {
    /// Creates records and returns them as stored.
    ///
    /// Every record is converted before anything is sent; one bad record
    /// fails the call without a request being made. Unset and null fields
    /// are left out of the payload.
    pub async fn create(&self, records: Vec<FieldInput>) -> Result<Vec<Record>> {
        let records = records
            .iter()
            .map(|input| {
                record::to_wire(input, &self.fields, WriteMode::Create).map(OutgoingRecord::new)
            })
            .collect::<Result<Vec<_>>>()?;

        batch::batched(records, |chunk| self.create_chunk(chunk)).await
    }

    async fn create_chunk(&self, records: Vec<OutgoingRecord>) -> Result<Vec<Record>> {
        let body = WriteRequest::new(records).into_json()?;
        let response = self.request(Method::Post, &self.path, Some(body)).await?;
        let list: RecordList = wire::decode(response)?;
        self.to_records(list.records)
    }
}
