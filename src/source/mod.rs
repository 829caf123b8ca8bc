//! Record sources.
//!
//! A dump reads records through the [`RecordSource`] trait, so an in-memory
//! list and a database table go through the same batching path:
//! - [`RecordList`]: records already in memory, dumped in list order
//! - [`SqliteTable`]: a SQLite table, paged by primary key ascending

mod batch;
mod sqlite;

use async_trait::async_trait;

use crate::error_handling::DumpError;
use crate::record::Record;

pub use batch::batches;
pub use sqlite::{model_name_for_table, SqliteTable};

/// A collection of records that can be counted and read page by page.
///
/// Implementations must return pages in a stable order (primary key ascending
/// for tables) so that concatenating consecutive pages yields every record
/// exactly once.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Model name the records belong to (e.g. `Sample`).
    fn model_name(&self) -> &str;

    /// Total number of records, without materializing them.
    async fn count(&self) -> Result<usize, DumpError>;

    /// Up to `limit` records starting at position `offset`.
    async fn fetch_batch(&self, offset: usize, limit: usize) -> Result<Vec<Record>, DumpError>;
}

/// Records held in memory.
#[derive(Debug, Clone)]
pub struct RecordList {
    model_name: String,
    records: Vec<Record>,
}

impl RecordList {
    /// Wraps `records`, dumped in the given order.
    pub fn new(model_name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            model_name: model_name.into(),
            records,
        }
    }
}

#[async_trait]
impl RecordSource for RecordList {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn count(&self) -> Result<usize, DumpError> {
        Ok(self.records.len())
    }

    async fn fetch_batch(&self, offset: usize, limit: usize) -> Result<Vec<Record>, DumpError> {
        Ok(self
            .records
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: i64) -> RecordList {
        RecordList::new(
            "Sample",
            (1..=n).map(|i| Record::new().with("id", i)).collect(),
        )
    }

    #[tokio::test]
    async fn test_record_list_count() {
        assert_eq!(numbered(3).count().await.unwrap(), 3);
        assert_eq!(numbered(0).count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_list_fetch_batch_pages() {
        let list = numbered(5);
        let page = list.fetch_batch(3, 10).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0], Record::new().with("id", 4i64));

        assert!(list.fetch_batch(5, 10).await.unwrap().is_empty());
    }
}
