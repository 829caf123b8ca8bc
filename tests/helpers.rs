// Shared test helpers for database setup and expected output.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;

/// Update-or-create block as seed runners expect it, before name substitution.
pub const UPDATE_CODE: &str = "
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

/// Creates (or reopens) a file-backed test database.
pub async fn create_test_pool_with_path(db_path: &Path) -> SqlitePool {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create test database")
}

/// Creates the `samples` and `empty_models` tables.
pub async fn create_db(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE samples (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            string VARCHAR(255),
            text TEXT,
            integer INTEGER,
            float FLOAT,
            decimal DECIMAL,
            datetime DATETIME,
            time TIME,
            date DATE,
            binary BLOB,
            boolean BOOLEAN,
            created_at DATETIME NOT NULL,
            updated_at DATETIME NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create samples table");

    sqlx::query(
        "CREATE TABLE empty_models (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            created_at DATETIME NOT NULL,
            updated_at DATETIME NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create empty_models table");
}

/// Inserts `n` identical sample rows.
pub async fn create_samples(pool: &SqlitePool, n: usize) {
    for _ in 0..n {
        sqlx::query(
            "INSERT INTO samples (
                string, text, integer, float, decimal, datetime, time, date, binary, boolean,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind("string")
        .bind("text")
        .bind(42i64)
        .bind(3.14f64)
        .bind("2.72")
        .bind("1776-07-04 19:14:00.000000")
        .bind("2000-01-01 03:15:00.000000")
        .bind("1863-11-19")
        .bind(b"binary".to_vec())
        .bind(false)
        .bind("2024-01-01 12:00:00.000000")
        .bind("2024-01-01 12:00:00.000000")
        .execute(pool)
        .await
        .expect("Failed to insert sample");
    }
}

/// The update block with the sample names substituted.
pub fn update_code() -> String {
    UPDATE_CODE
        .replace("[model_name]", "Sample")
        .replace("[var_name]", "sample")
}

/// Expected dump of three samples, optionally with their ids.
pub fn expected_output(include_id: bool, id_offset: i64) -> String {
    let data: Vec<String> = ((1 + id_offset)..=(3 + id_offset))
        .map(|i| {
            format!(
                "{{{}string: \"string\", text: \"text\", integer: 42, float: 3.14, decimal: \"2.72\", datetime: \"1776-07-04 19:14:00\", time: \"2000-01-01 03:15:00\", date: \"1863-11-19\", binary: \"binary\", boolean: false}}",
                if include_id { format!("id: {i}, ") } else { String::new() }
            )
        })
        .collect();

    format!("sample = [\n  {}\n]\n{}", data.join(",\n  "), update_code())
}
