use super::{segment, Table};
use crate::{
    wire::{self, WireRecord},
    Method, Record, Result,
};

impl Table {
    /// Fetches one record by id.
    pub async fn get(&self, id: &str) -> Result<Record> {
        let path = format!("{}/{}?returnFieldsByFieldId=true", self.path, segment(id));
        let response = self.request(Method::Get, &path, None).await?;
        let record: WireRecord = wire::decode(response)?;
        record.into_record(&self.fields, &self.unexpected_fields)
    }
}
