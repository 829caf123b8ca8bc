// storage/mod.rs
// Database access for the SQLite record source

pub mod pool;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use pool::{init_db_pool_with_path, DbPool};
