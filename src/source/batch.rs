//! Batch fetching.

use futures::stream::{self, Stream};
use log::{debug, warn};

use crate::error_handling::DumpError;
use crate::record::Record;

use super::RecordSource;

/// Lazily pages through the first `total` records of `source`.
///
/// Each page holds at most `batch_size` records and is only queried when the
/// stream is polled. Pages come back in source order, so concatenating them
/// reproduces the source exactly once. The stream cannot be restarted.
///
/// A page that comes back empty before `total` is reached ends the stream
/// (rows were deleted while dumping).
pub fn batches<'a, S>(
    source: &'a S,
    batch_size: usize,
    total: usize,
) -> impl Stream<Item = Result<Vec<Record>, DumpError>> + 'a
where
    S: RecordSource + ?Sized,
{
    let batch_size = batch_size.max(1);
    stream::try_unfold(0usize, move |offset| async move {
        if offset >= total {
            return Ok::<_, DumpError>(None);
        }

        let limit = batch_size.min(total - offset);
        let mut batch = source.fetch_batch(offset, limit).await?;
        if batch.is_empty() {
            warn!(
                "{} returned no rows at offset {} of {}; stopping early",
                source.model_name(),
                offset,
                total
            );
            return Ok(None);
        }
        batch.truncate(limit);

        debug!(
            "Fetched {} {} record(s) at offset {}",
            batch.len(),
            source.model_name(),
            offset
        );
        let next = offset + batch.len();
        Ok(Some((batch, next)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use crate::source::RecordList;
    use futures::TryStreamExt;

    fn numbered(n: i64) -> RecordList {
        RecordList::new(
            "Sample",
            (1..=n).map(|i| Record::new().with("id", i)).collect(),
        )
    }

    async fn collect_sizes(source: &RecordList, batch_size: usize, total: usize) -> Vec<usize> {
        batches(source, batch_size, total)
            .map_ok(|batch| batch.len())
            .try_collect()
            .await
            .expect("batches should not fail")
    }

    #[tokio::test]
    async fn test_batch_size_one_yields_single_record_batches() {
        let list = numbered(3);
        assert_eq!(collect_sizes(&list, 1, 3).await, vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn test_large_batch_size_yields_one_batch() {
        let list = numbered(3);
        assert_eq!(collect_sizes(&list, 103, 3).await, vec![3]);
    }

    #[tokio::test]
    async fn test_uneven_batches() {
        let list = numbered(5);
        assert_eq!(collect_sizes(&list, 2, 5).await, vec![2, 2, 1]);
    }

    #[tokio::test]
    async fn test_total_caps_records() {
        let list = numbered(5);
        assert_eq!(collect_sizes(&list, 2, 3).await, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_zero_total_yields_nothing() {
        let list = numbered(5);
        assert!(collect_sizes(&list, 2, 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_order_preserved_across_batches() {
        let list = numbered(7);
        let ids: Vec<Value> = batches(&list, 3, 7)
            .map_ok(|batch| stream::iter(batch.into_iter().map(Ok::<_, DumpError>)))
            .try_flatten()
            .map_ok(|record| record.get("id").cloned().unwrap_or(Value::Null))
            .try_collect()
            .await
            .unwrap();
        let expected: Vec<Value> = (1..=7).map(Value::Integer).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_short_source_stops_early() {
        // Source claims more rows than it can deliver.
        let list = numbered(2);
        assert_eq!(collect_sizes(&list, 1, 4).await, vec![1, 1]);
    }
}
