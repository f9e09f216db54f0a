//! Queries against the library database.
//!
//! Every function borrows the pool and runs one or two static statements.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::Result;

/// Books inserted by [`setup_schema`].
pub const SAMPLE_BOOKS: [(&str, &str, i32); 3] = [
    ("Clean Code", "Robert C. Martin", 2008),
    ("The Pragmatic Programmer", "Andrew Hunt", 1999),
    ("Docker Deep Dive", "Nigel Poulton", 2023)
];

/// Row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: Option<i32>
}

/// Identity of the connected database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DatabaseInfo {
    pub database: String,
    pub user: String,
    pub version: String
}

/// Database server time. Fails when no connection can be acquired.
pub async fn now(pool: &PgPool) -> Result<DateTime<Utc>> {
    let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(pool)
        .await?;
    Ok(now)
}

/// Name, role and server version of the current connection.
pub async fn database_info(pool: &PgPool) -> Result<DatabaseInfo> {
    let info = sqlx::query_as::<_, DatabaseInfo>(
        r"
        SELECT
            current_database()::text AS database,
            current_user::text AS user,
            version() AS version
        "
    )
    .fetch_one(pool)
    .await?;
    Ok(info)
}

/// Creates the `books` table if missing and inserts the sample rows.
///
/// Safe to run repeatedly: existing `(title, author)` pairs are skipped.
pub async fn setup_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS books (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            author VARCHAR(255) NOT NULL,
            year INTEGER,
            UNIQUE (title, author)
        )
        "
    )
    .execute(pool)
    .await?;

    let mut tx = pool.begin().await?;
    for (title, author, year) in SAMPLE_BOOKS {
        sqlx::query(
            r"
            INSERT INTO books (title, author, year)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            "
        )
        .bind(title)
        .bind(author)
        .bind(year)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(())
}

/// All books in insertion order.
pub async fn list_books(pool: &PgPool) -> Result<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>("SELECT id, title, author, year FROM books ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(books)
}
