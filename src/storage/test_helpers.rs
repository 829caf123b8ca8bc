//! Shared test helpers for database-backed tests.
//!
//! This module provides common utilities for database setup and test data creation
//! used across source and dump tests.

#[cfg(test)]
use sqlx::SqlitePool;

/// Creates an in-memory test database pool.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Creates a `samples` table with one column per supported value type.
#[cfg(test)]
pub async fn create_samples_table(pool: &SqlitePool) {
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
}

/// Inserts one sample row with fixed values and returns its ID.
#[cfg(test)]
pub async fn insert_sample(pool: &SqlitePool) -> i64 {
    sqlx::query(
        "INSERT INTO samples (
            string, text, integer, float, decimal, datetime, time, date, binary, boolean,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id",
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
    .bind("2024-01-01 00:00:00.000000")
    .bind("2024-01-01 00:00:00.000000")
    .fetch_one(pool)
    .await
    .map(|row| sqlx::Row::get::<i64, _>(&row, 0))
    .expect("Failed to insert sample")
}
