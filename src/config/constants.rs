//! Configuration constants.
//!
//! Default values shared by the library options and the CLI.

/// Number of records fetched per query round-trip.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Attributes left out of every dump unless the caller overrides the exclusion set.
///
/// Surrogate keys and bookkeeping timestamps are regenerated when the seed file is loaded.
pub const DEFAULT_EXCLUDE: &[&str] = &["id", "created_at", "updated_at"];

/// Default SQLite database path for the CLI.
pub const DB_PATH: &str = "./seed.db";

// Rendering
/// Keyword emitted for NULL values.
pub const NIL_LITERAL: &str = "nil";
/// Layout used for datetime values (and time values on the reference date).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Layout used for date values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Year, month and day of the date that time-of-day values are anchored to.
pub const TIME_REFERENCE_DATE: (i32, u32, u32) = (2000, 1, 1);
/// Indentation in front of every record inside the array block.
pub const RECORD_INDENT: &str = "  ";

/// Update-or-create block appended after the data.
///
/// `[var_name]` and `[model_name]` are substituted when the block is emitted.
/// Seed runners match on this text, so it must not change.
pub const UPSERT_TEMPLATE: &str = "
[var_name].each do |f|
  item = [model_name].find_by_key(f[:key])
  unless item.nil?
    item.update_attributes(f)
    item.save
  else
    [model_name].create!(f)
  end
end
";
