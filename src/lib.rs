//! seed_dump library: turns database records into seed file literals.
//!
//! A dump reads records from a [`RecordSource`] in batches ordered by primary
//! key, renders each one as a hash literal and wraps them in an array block,
//! optionally followed by an update-or-create block:
//!
//! ```text
//! sample = [
//!   {string: "string", integer: 42, boolean: false},
//!   {string: "string", integer: 42, boolean: false}
//! ]
//! ```
//!
//! # Example
//!
//! ```no_run
//! use seed_dump::{dump, init_db_pool_with_path, DumpOptions, SqliteTable};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = init_db_pool_with_path(Path::new("development.db")).await?;
//! let samples = SqliteTable::open(pool, "samples").await?;
//!
//! let options = DumpOptions::default().with_file("db/seeds.rb", false);
//! match dump(&samples, &options).await? {
//!     Some(_) => println!("Wrote db/seeds.rb"),
//!     None => println!("Nothing to dump"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Dumping is async because the SQLite source is built on `sqlx`; call it
//! from within a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod dump;
mod error_handling;
pub mod initialization;
mod record;
pub mod source;
mod storage;

// Re-export public API
pub use config::{DumpOptions, LogFormat, LogLevel};
pub use dump::dump;
pub use error_handling::{DatabaseError, DumpError, InitializationError};
pub use record::{Record, Value, ValueKind};
pub use source::{RecordList, RecordSource, SqliteTable};
pub use storage::{init_db_pool_with_path, DbPool};
