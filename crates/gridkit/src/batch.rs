//! Fan-out of bulk operations over the API's per-request record limit.

use crate::Result;

use futures::future::try_join_all;
use std::future::Future;

/// The most records a single create, update or delete request may carry.
pub const MAX_RECORDS_PER_REQUEST: usize = 10;

/// Runs `f` once per chunk of at most [`MAX_RECORDS_PER_REQUEST`] items.
///
/// Chunks are contiguous and run concurrently. The returned vector holds one
/// result per chunk, in input order. The first failing chunk fails the whole
/// call. An empty input returns immediately without calling `f`.
pub async fn for_each_chunk<T, R, F, Fut>(items: Vec<T>, f: F) -> Result<Vec<R>>
where
    F: Fn(Vec<T>) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    if items.is_empty() {
        return Ok(vec![]);
    }

    let chunks = chunk(items);
    tracing::debug!(chunks = chunks.len(), "sending batched requests");

    try_join_all(chunks.into_iter().map(f)).await
}

/// Like [`for_each_chunk`], for operations returning one output per input.
/// Outputs are flattened back into input order.
pub async fn batched<T, R, F, Fut>(items: Vec<T>, f: F) -> Result<Vec<R>>
where
    F: Fn(Vec<T>) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
{
    let chunks = for_each_chunk(items, f).await?;
    Ok(chunks.into_iter().flatten().collect())
}

fn chunk<T>(items: Vec<T>) -> Vec<Vec<T>> {
    let mut chunks = Vec::with_capacity(items.len().div_ceil(MAX_RECORDS_PER_REQUEST));
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        chunks.push(items.by_ref().take(MAX_RECORDS_PER_REQUEST).collect());
    }

    chunks
}
