//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring a single dump.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_PATH, DEFAULT_BATCH_SIZE, DEFAULT_EXCLUDE};
use crate::error_handling::DumpError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Options for one dump invocation.
///
/// The record source is passed separately to [`crate::dump`]; everything else
/// that shapes the output lives here.
///
/// # Examples
///
/// ```
/// use seed_dump::DumpOptions;
///
/// let options = DumpOptions {
///     batch_size: 500,
///     ..Default::default()
/// }
/// .with_exclude(["id", "password_digest"]);
///
/// assert!(options.exclude.contains("password_digest"));
/// assert!(!options.exclude.contains("created_at"));
/// ```
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Records fetched per query round-trip (must be positive)
    pub batch_size: usize,

    /// Attribute names left out of every record
    pub exclude: HashSet<String>,

    /// Seed file to write (the dump is returned as a string either way)
    pub file: Option<PathBuf>,

    /// Append to `file` instead of overwriting it
    pub append: bool,

    /// Emit the update-or-create block after the data
    pub upsert_template: bool,

    /// Dump at most this many records
    pub limit: Option<usize>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            file: None,
            append: false,
            upsert_template: true,
            limit: None,
        }
    }
}

impl DumpOptions {
    /// Replaces the exclusion set.
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    /// Writes the dump to `path`, overwriting or appending.
    pub fn with_file(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
        self.file = Some(path.into());
        self.append = append;
        self
    }

    /// Checks option values before any record is fetched.
    ///
    /// # Errors
    ///
    /// Returns `DumpError::InvalidOption` naming the offending field.
    pub fn validate(&self) -> Result<(), DumpError> {
        if self.batch_size == 0 {
            return Err(DumpError::InvalidOption {
                field: "batch_size",
                message: "batch_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print the samples table as a seed block
/// seed_dump samples --db-path ./development.db
///
/// # Write two tables into one seed file, keeping ids
/// seed_dump users posts --file db/seeds.rb --exclude created_at,updated_at
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seed_dump",
    about = "Dumps SQLite tables as seed file records."
)]
pub struct Opt {
    /// Tables to dump, in order
    #[arg(required = true)]
    pub tables: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Model name used in the upsert block (single table only; derived from the table otherwise)
    #[arg(long)]
    pub model: Option<String>,

    /// Comma separated attributes to leave out (default: id,created_at,updated_at)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Seed file to write; the dump goes to stdout when omitted
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Append to the seed file instead of overwriting it
    #[arg(long)]
    pub append: bool,

    /// Records fetched per query
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Dump at most this many records per table
    #[arg(long)]
    pub limit: Option<usize>,

    /// Leave out the update-or-create block
    #[arg(long)]
    pub no_upsert: bool,
}

impl Opt {
    /// Builds the dump options for the table at `index`.
    ///
    /// Every table after the first is appended to the seed file so that one
    /// invocation produces a single file with one block per table.
    pub fn dump_options(&self, index: usize) -> DumpOptions {
        let mut options = DumpOptions {
            batch_size: self.batch_size,
            file: self.file.clone(),
            append: self.append || index > 0,
            upsert_template: !self.no_upsert,
            limit: self.limit,
            ..Default::default()
        };
        if let Some(exclude) = &self.exclude {
            options = options.with_exclude(
                exclude
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }
        options
    }
}
