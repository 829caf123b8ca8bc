//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (batch size, default exclusions, rendering layouts)
//! - Dump options used by the library
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{DumpOptions, LogFormat, LogLevel, Opt};
