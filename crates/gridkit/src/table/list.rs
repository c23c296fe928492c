use super::Table;
use crate::{
    paginate::{self, Page},
    query,
    wire::{self, RecordList},
    ListQuery, Method, Record, Result,
};

use tokio_stream::Stream;

impl Table {
    /// Lists every record matching `query`, following pagination to the end.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Record>> {
        let params = query.params(&self.fields)?;
        let params = &params;
        paginate::walk(move |offset| self.fetch_page(params, offset)).await
    }

    /// Lists records one page at a time. Pages are fetched as the stream is
    /// polled.
    pub fn pages<'a>(
        &'a self,
        query: &'a ListQuery,
    ) -> impl Stream<Item = Result<Page<Record>>> + 'a {
        async_stream::try_stream! {
            let params = query.params(&self.fields)?;
            let params = &params;

            let pages = paginate::pages(move |offset| self.fetch_page(params, offset));
            for await page in pages {
                yield page?;
            }
        }
    }

    /// Fetches only the first page of `query`.
    pub async fn first_page(&self, query: &ListQuery) -> Result<Page<Record>> {
        self.page(query, None).await
    }

    /// Fetches the page starting at `offset`, a cursor returned with an
    /// earlier page of the same query.
    pub async fn page(&self, query: &ListQuery, offset: Option<&str>) -> Result<Page<Record>> {
        let params = query.params(&self.fields)?;
        self.fetch_page(&params, offset.map(str::to_string)).await
    }

    async fn fetch_page(
        &self,
        params: &[(String, String)],
        offset: Option<String>,
    ) -> Result<Page<Record>> {
        let path = format!("{}?{}", self.path, query::encode(params, offset.as_deref()));
        let response = self.request(Method::Get, &path, None).await?;
        let list: RecordList = wire::decode(response)?;

        Ok(Page::new(self.to_records(list.records)?, list.offset))
    }
}
