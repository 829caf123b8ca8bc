//! Error handling.
//!
//! Error types are split by where they originate:
//! - **Initialization**: logger setup in the binary
//! - **Database**: opening and querying the SQLite source
//! - **Dump**: everything that aborts a dump, including formatting and I/O

mod types;

// Re-export public API
pub use types::{DatabaseError, DumpError, InitializationError};
