//! SQLite record source.
//!
//! Reads a table page by page ordered by its primary key (or `rowid` when the
//! table has none). Column types come from the declared types reported by
//! `PRAGMA table_info`, so a `DATETIME` column yields `Value::DateTime` even
//! though SQLite stores it as text.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error_handling::{DatabaseError, DumpError};
use crate::record::{Record, Value, ValueKind};
use crate::storage::DbPool;

use super::RecordSource;

const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const TIME_LAYOUTS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

#[derive(Debug, Clone)]
struct Column {
    name: String,
    declared_type: String,
    kind: Option<ValueKind>,
}

impl Column {
    /// Select expression that hands back the storage class the decoder expects.
    ///
    /// Numeric columns are read as stored; SQLite does not enforce declared
    /// types, so the decoder checks their storage class instead of casting.
    fn select_expr(&self) -> String {
        let name = quote_ident(&self.name);
        match self.kind {
            Some(ValueKind::Integer | ValueKind::Float) => name,
            Some(ValueKind::Binary) => format!("CAST({name} AS BLOB)"),
            _ => format!("CAST({name} AS TEXT)"),
        }
    }

    fn storage_class_expr(&self) -> String {
        format!("typeof({})", quote_ident(&self.name))
    }

    /// Decodes the value at `idx`; `class_idx` holds its `typeof()`.
    fn decode(&self, row: &SqliteRow, idx: usize, class_idx: usize) -> Result<Value, DumpError> {
        let Some(kind) = self.kind else {
            let type_name = if self.declared_type.is_empty() {
                "untyped"
            } else {
                self.declared_type.as_str()
            };
            return Err(DumpError::format(
                &self.name,
                type_name,
                "unsupported column type",
            ));
        };

        let value = match kind {
            ValueKind::Integer | ValueKind::Float => {
                let storage_class: String = row.try_get(class_idx)?;
                self.decode_number(row, idx, kind, &storage_class)?
            }
            ValueKind::Binary => row.try_get::<Option<Vec<u8>>, _>(idx)?.map(Value::Binary),
            ValueKind::String => row.try_get::<Option<String>, _>(idx)?.map(Value::String),
            ValueKind::Decimal => row.try_get::<Option<String>, _>(idx)?.map(Value::Decimal),
            ValueKind::Boolean => self.parse_text(row, idx, kind, parse_bool)?.map(Value::Boolean),
            ValueKind::DateTime => self
                .parse_text(row, idx, kind, parse_datetime)?
                .map(Value::DateTime),
            ValueKind::Date => self.parse_text(row, idx, kind, parse_date)?.map(Value::Date),
            ValueKind::Time => self.parse_text(row, idx, kind, parse_time)?.map(Value::Time),
        };
        Ok(value.unwrap_or(Value::Null))
    }

    fn decode_number(
        &self,
        row: &SqliteRow,
        idx: usize,
        kind: ValueKind,
        storage_class: &str,
    ) -> Result<Option<Value>, DumpError> {
        let value = match (kind, storage_class) {
            (_, "null") => return Ok(None),
            (ValueKind::Integer, "integer") => Value::Integer(row.try_get(idx)?),
            (ValueKind::Integer, "real") => {
                let f: f64 = row.try_get(idx)?;
                if f.fract() != 0.0 || !((i64::MIN as f64)..(i64::MAX as f64)).contains(&f) {
                    return Err(DumpError::format(
                        &self.name,
                        kind.as_str(),
                        format!("{f} is not a whole number"),
                    ));
                }
                Value::Integer(f as i64)
            }
            (ValueKind::Float, "real") => Value::Float(row.try_get(idx)?),
            (ValueKind::Float, "integer") => {
                let i: i64 = row.try_get(idx)?;
                Value::Float(i as f64)
            }
            _ => {
                return Err(DumpError::format(
                    &self.name,
                    kind.as_str(),
                    format!("stored as {storage_class}"),
                ))
            }
        };
        Ok(Some(value))
    }

    fn parse_text<T>(
        &self,
        row: &SqliteRow,
        idx: usize,
        kind: ValueKind,
        parse: fn(&str) -> Option<T>,
    ) -> Result<Option<T>, DumpError> {
        match row.try_get::<Option<String>, _>(idx)? {
            None => Ok(None),
            Some(text) => parse(&text).map(Some).ok_or_else(|| {
                DumpError::format(&self.name, kind.as_str(), format!("cannot parse {text:?}"))
            }),
        }
    }
}

/// A SQLite table read as a record source.
#[derive(Debug, Clone)]
pub struct SqliteTable {
    pool: DbPool,
    table: String,
    model_name: String,
    columns: Vec<Column>,
    order_by: Vec<String>,
}

impl SqliteTable {
    /// Introspects `table` and prepares it for paging.
    ///
    /// The model name defaults to the singular camel-cased table name
    /// (`samples` → `Sample`); override it with [`SqliteTable::with_model_name`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::TableNotFound` when the table has no columns.
    pub async fn open(pool: DbPool, table: &str) -> Result<Self, DumpError> {
        let rows = sqlx::query(&format!("PRAGMA table_info({})", quote_ident(table)))
            .fetch_all(pool.as_ref())
            .await
            .map_err(DatabaseError::SqlError)?;
        if rows.is_empty() {
            return Err(DatabaseError::TableNotFound(table.to_string()).into());
        }

        let mut columns = Vec::with_capacity(rows.len());
        let mut keys: Vec<(i64, String)> = Vec::new();
        for row in &rows {
            let name: String = row.try_get("name")?;
            let declared_type: String = row.try_get("type")?;
            let pk: i64 = row.try_get("pk")?;
            if pk > 0 {
                keys.push((pk, name.clone()));
            }
            let kind = column_kind(&declared_type);
            columns.push(Column {
                name,
                declared_type,
                kind,
            });
        }

        // Composite keys are ordered by their position in the key.
        keys.sort();
        let order_by = if keys.is_empty() {
            vec!["rowid".to_string()]
        } else {
            keys.iter().map(|(_, name)| quote_ident(name)).collect()
        };

        debug!(
            "Table {} has {} column(s), ordered by {}",
            table,
            columns.len(),
            order_by.join(", ")
        );

        Ok(Self {
            pool,
            table: table.to_string(),
            model_name: model_name_for_table(table),
            columns,
            order_by,
        })
    }

    /// Overrides the model name derived from the table name.
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    fn select_sql(&self) -> String {
        // Values first, then one storage class per column.
        let exprs: Vec<String> = self
            .columns
            .iter()
            .map(Column::select_expr)
            .chain(self.columns.iter().map(Column::storage_class_expr))
            .collect();
        format!(
            "SELECT {} FROM {} ORDER BY {} LIMIT ? OFFSET ?",
            exprs.join(", "),
            quote_ident(&self.table),
            self.order_by.join(", ")
        )
    }

    fn decode_row(&self, row: &SqliteRow) -> Result<Record, DumpError> {
        let mut record = Record::new();
        for (idx, column) in self.columns.iter().enumerate() {
            let class_idx = self.columns.len() + idx;
            record.insert(column.name.clone(), column.decode(row, idx, class_idx)?);
        }
        Ok(record)
    }
}

#[async_trait]
impl RecordSource for SqliteTable {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn count(&self) -> Result<usize, DumpError> {
        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", quote_ident(&self.table)))
                .fetch_one(self.pool.as_ref())
                .await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    async fn fetch_batch(&self, offset: usize, limit: usize) -> Result<Vec<Record>, DumpError> {
        let rows = sqlx::query(&self.select_sql())
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(self.pool.as_ref())
            .await?;
        rows.iter().map(|row| self.decode_row(row)).collect()
    }
}

/// Derives a model name from a table name: `samples` → `Sample`,
/// `user_profiles` → `UserProfile`, `categories` → `Category`.
pub fn model_name_for_table(table: &str) -> String {
    singularize(table)
        .split(['_', '-', ' '])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn singularize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if lower.len() > 3 && lower.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if ["sses", "shes", "ches", "xes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }
    if lower.len() > 1 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us")
    {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps a declared SQLite column type to a value kind.
///
/// Follows SQLite's affinity substrings, refined for the date, time and
/// boolean types that SQLite itself stores as text or integers. Columns
/// without a declared type, or with a type none of the rules match, map to
/// `None` and fail when dumped.
fn column_kind(declared_type: &str) -> Option<ValueKind> {
    let t = declared_type.trim().to_ascii_uppercase();
    if t.is_empty() {
        None
    } else if t.starts_with("BOOL") {
        Some(ValueKind::Boolean)
    } else if t.contains("DATETIME") || t.contains("TIMESTAMP") {
        Some(ValueKind::DateTime)
    } else if t.starts_with("DATE") {
        Some(ValueKind::Date)
    } else if t.starts_with("TIME") {
        Some(ValueKind::Time)
    } else if t.contains("INT") {
        Some(ValueKind::Integer)
    } else if t.contains("CHAR")
        || t.contains("CLOB")
        || t.contains("TEXT")
        || t.starts_with("STRING")
        || t.starts_with("UUID")
        || t.starts_with("JSON")
    {
        Some(ValueKind::String)
    } else if t.contains("BLOB") || t.contains("BINARY") {
        Some(ValueKind::Binary)
    } else if t.contains("REAL") || t.contains("FLOA") || t.contains("DOUB") {
        Some(ValueKind::Float)
    } else if t.starts_with("DECIMAL") || t.starts_with("NUMERIC") {
        Some(ValueKind::Decimal)
    } else {
        None
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(text).map(|dt| dt.date()))
}

/// Time columns are often stored on a dummy date (`2000-01-01 03:15:00`).
fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(text, layout).ok())
        .or_else(|| parse_datetime(text).map(|dt| dt.time()))
}
