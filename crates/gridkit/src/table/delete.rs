use super::Table;
use crate::{
    batch,
    wire::{self, DeleteResponse},
    Method, Result,
};

use serde::Deserialize;
use url::form_urlencoded;

/// Confirmation of one deleted record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletedRecord {
    pub id: String,
    pub deleted: bool,
}

impl Table {
    /// Deletes records by id.
    pub async fn delete(
        &self,
        ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Vec<DeletedRecord>> {
        let ids = ids.into_iter().map(Into::into).collect::<Vec<String>>();
        batch::batched(ids, |chunk| self.delete_chunk(chunk)).await
    }

    async fn delete_chunk(&self, ids: Vec<String>) -> Result<Vec<DeletedRecord>> {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(ids.iter().map(|id| ("records[]", id)))
            .finish();

        let path = format!("{}?{}", self.path, query);
        let response = self.request(Method::Delete, &path, None).await?;
        let response: DeleteResponse = wire::decode(response)?;
        Ok(response.records)
    }
}
