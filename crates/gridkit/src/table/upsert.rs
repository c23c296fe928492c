use super::{Table, UpdateOptions};
use crate::{
    batch,
    wire::{self, OutgoingRecord, PerformUpsert, UpsertResponse, WriteRequest},
    FieldInput, Record, Result,
};

use gridkit_core::{bail, record, schema::FieldLookup, WriteMode};

/// Outcome of an upsert.
///
/// `created_records` and `updated_records` are reported by the API and hold
/// record ids; they are passed through as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpsertResult {
    pub records: Vec<Record>,
    pub created_records: Vec<String>,
    pub updated_records: Vec<String>,
}

impl Table {
    /// Creates or updates records, matching existing ones on `merge_on`.
    ///
    /// Records whose `merge_on` values match an existing record update it;
    /// the rest are created. Fields set to null are cleared on match.
    pub async fn upsert(
        &self,
        records: Vec<FieldInput>,
        merge_on: impl IntoIterator<Item = impl AsRef<str>>,
        options: UpdateOptions,
    ) -> Result<UpsertResult> {
        let lookup = FieldLookup::new(&self.fields);
        let merge_on = merge_on
            .into_iter()
            .map(|name_or_id| Ok(lookup.resolve(name_or_id.as_ref())?.id.clone()))
            .collect::<Result<Vec<_>>>()?;

        if merge_on.is_empty() {
            bail!("upsert needs at least one field to merge on");
        }

        let records = records
            .iter()
            .map(|input| {
                record::to_wire(input, &self.fields, WriteMode::Update).map(OutgoingRecord::new)
            })
            .collect::<Result<Vec<_>>>()?;

        let merge_on = &merge_on;
        let chunks = batch::for_each_chunk(records, move |chunk| {
            self.upsert_chunk(chunk, merge_on, options)
        })
        .await?;

        Ok(chunks
            .into_iter()
            .fold(UpsertResult::default(), |mut acc, chunk| {
                acc.records.extend(chunk.records);
                acc.created_records.extend(chunk.created_records);
                acc.updated_records.extend(chunk.updated_records);
                acc
            }))
    }

    async fn upsert_chunk(
        &self,
        records: Vec<OutgoingRecord>,
        merge_on: &[String],
        options: UpdateOptions,
    ) -> Result<UpsertResult> {
        let mut request = options.apply(WriteRequest::new(records));
        request.perform_upsert = Some(PerformUpsert {
            fields_to_merge_on: merge_on.to_vec(),
        });

        let response = self
            .request(options.method(), &self.path, Some(request.into_json()?))
            .await?;
        let response: UpsertResponse = wire::decode(response)?;

        Ok(UpsertResult {
            records: self.to_records(response.records)?,
            created_records: response.created_records,
            updated_records: response.updated_records,
        })
    }
}
