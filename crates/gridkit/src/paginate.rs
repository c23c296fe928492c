//! Cursor-driven pagination.
//!
//! The API returns a page of records plus an opaque `offset` cursor when more
//! records remain. Each request depends on the previous response's cursor, so
//! pages are always fetched one after another.

use crate::Result;

use std::future::Future;
use tokio_stream::{Stream, StreamExt};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in this page
    pub items: Vec<T>,

    /// Cursor for fetching the next page, `None` on the last page
    pub offset: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, offset: Option<String>) -> Page<T> {
        Page { items, offset }
    }

    /// Returns true if there is a next page available
    pub fn has_next(&self) -> bool {
        self.offset.is_some()
    }
}

/// Lazily walks pages, calling `fetch` with the cursor returned by the
/// previous page (`None` for the first). The stream ends after the first
/// page without a cursor or at the first error.
pub fn pages<T, F, Fut>(mut fetch: F) -> impl Stream<Item = Result<Page<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    async_stream::try_stream! {
        let mut offset = None;
        let mut fetched = 0usize;

        loop {
            let page = fetch(offset.take()).await?;
            fetched += 1;

            tracing::debug!(
                page = fetched,
                records = page.items.len(),
                has_next = page.has_next(),
                "fetched page"
            );

            offset = page.offset.clone();
            yield page;

            if offset.is_none() {
                break;
            }
        }
    }
}

/// Walks every page and returns all items in page order. Any failing page
/// fails the whole walk.
pub async fn walk<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut pages = std::pin::pin!(pages(fetch));

    let mut items = vec![];
    while let Some(page) = pages.next().await {
        items.extend(page?.items);
    }

    Ok(items)
}
