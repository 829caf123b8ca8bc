//! The dump engine.
//!
//! `dump` pages through a record source, formats every record, assembles the
//! seed block and optionally writes it to a file:
//!
//! source → batches → `format_record` per record → `assemble` → string / file
//!
//! The whole block is built in memory before the file is opened, so a
//! formatting error never leaves a half-written seed file behind.

mod assemble;
mod format;
mod output;

use std::pin::pin;

use futures::TryStreamExt;
use log::{debug, info};

use crate::config::DumpOptions;
use crate::error_handling::DumpError;
use crate::source::{batches, RecordSource};

pub use assemble::{assemble, underscore, upsert_block};
pub use format::{format_record, format_value};
pub use output::write_seed_file;

/// Dumps every record of `source` as a seed block.
///
/// Returns `Ok(None)` when the source has no records; no file is written in
/// that case. Otherwise returns the block, which is also written to
/// `options.file` (truncating, or appending with `options.append`) when a
/// file is given.
///
/// The output does not depend on `options.batch_size`.
///
/// # Errors
///
/// - `DumpError::InvalidOption` for a zero batch size
/// - `DumpError::Database` when the source fails
/// - `DumpError::Format` when a value cannot be rendered
/// - `DumpError::Io` when the seed file cannot be written
///
/// # Example
///
/// ```
/// use seed_dump::{dump, DumpOptions, Record, RecordList};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), seed_dump::DumpError> {
/// let list = RecordList::new(
///     "Sample",
///     vec![Record::new().with("id", 1i64).with("name", "first")],
/// );
///
/// let output = dump(&list, &DumpOptions { upsert_template: false, ..Default::default() }).await?;
/// assert_eq!(output.as_deref(), Some("sample = [\n  {name: \"first\"}\n]\n"));
/// # Ok(())
/// # }
/// ```
pub async fn dump<S>(source: &S, options: &DumpOptions) -> Result<Option<String>, DumpError>
where
    S: RecordSource + ?Sized,
{
    options.validate()?;

    let model_name = source.model_name();
    let count = source.count().await?;
    let total = options.limit.map_or(count, |limit| limit.min(count));
    if total == 0 {
        info!("No {} records to dump", model_name);
        return Ok(None);
    }

    info!(
        "Dumping {} {} record(s) in batches of {}",
        total, model_name, options.batch_size
    );

    let mut formatted = Vec::new();
    let mut pages = pin!(batches(source, options.batch_size, total));
    while let Some(batch) = pages.try_next().await? {
        for record in &batch {
            formatted.push(format_record(record, &options.exclude)?);
        }
        debug!("Formatted {}/{} {} record(s)", formatted.len(), total, model_name);
    }
    if formatted.is_empty() {
        info!("No {} records to dump", model_name);
        return Ok(None);
    }

    let variable_name = underscore(model_name);
    let output = assemble(
        &variable_name,
        model_name,
        &formatted,
        options.upsert_template,
    );

    if let Some(path) = &options.file {
        write_seed_file(path, &output, options.append).await?;
    }

    Ok(Some(output))
}
