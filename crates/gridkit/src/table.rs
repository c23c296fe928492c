mod builder;
pub use builder::Builder;

mod create;

mod delete;
pub use delete::DeletedRecord;

mod get;

mod list;

mod update;
pub use update::{RecordUpdate, UpdateOptions};

mod upsert;
pub use upsert::UpsertResult;

use crate::{wire::WireRecord, FieldSchema, Json, Method, Record, Result, Transport};

use gridkit_core::UnexpectedFieldPolicy;
use std::sync::Arc;
use url::form_urlencoded;

/// Handle to one table of one base.
///
/// Holds the transport, the table's field schema and the read policy. Every
/// operation converts with the schema given at build time; the handle keeps
/// no other state and is cheap to clone.
#[derive(Debug, Clone)]
pub struct Table {
    transport: Arc<dyn Transport>,

    /// `{base}/{table}`, percent-encoded
    path: String,

    fields: Arc<[FieldSchema]>,

    unexpected_fields: UnexpectedFieldPolicy,
}

impl Table {
    /// Starts building a table handle. `table` is the table's id or name.
    pub fn builder(
        transport: Arc<dyn Transport>,
        base_id: impl Into<String>,
        table: impl Into<String>,
    ) -> Builder {
        Builder::new(transport, base_id.into(), table.into())
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// The relative path of the table's records endpoint.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn unexpected_fields(&self) -> UnexpectedFieldPolicy {
        self.unexpected_fields
    }

    async fn request(&self, method: Method, path: &str, body: Option<Json>) -> Result<Json> {
        tracing::debug!(%method, path, "sending request");
        self.transport.request(method, path, body).await
    }

    fn to_records(&self, records: Vec<WireRecord>) -> Result<Vec<Record>> {
        records
            .into_iter()
            .map(|record| record.into_record(&self.fields, &self.unexpected_fields))
            .collect()
    }
}

/// Percent-encodes one path segment.
fn segment(s: &str) -> String {
    // The form encoder writes spaces as `+`; a literal `+` comes out as `%2B`.
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
