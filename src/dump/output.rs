//! Seed file output.

use std::path::Path;

use log::info;
use tokio::io::AsyncWriteExt;

/// Writes `contents` to `path` in a single open.
///
/// With `append` the existing contents are kept and `contents` goes after
/// them; otherwise the file is truncated first. The file is created if
/// missing and flushed before returning.
///
/// # Errors
///
/// Returns the underlying I/O error unchanged.
pub async fn write_seed_file(path: &Path, contents: &str, append: bool) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let mut file = options.open(path).await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;

    info!(
        "{} {} bytes to {}",
        if append { "Appended" } else { "Wrote" },
        contents.len(),
        path.display()
    );
    Ok(())
}
