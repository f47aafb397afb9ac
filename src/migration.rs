//! Table DDL for `users` and `planets`.
//!
//! Uniqueness of `users.email` and `planets.planet_name` lives in the schema; inserts
//! rely on the constraint rather than a lookup beforehand.

use crate::error::AppError;
use sqlx::SqlitePool;

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE COLLATE NOCASE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        planet_name TEXT NOT NULL UNIQUE,
        planet_type TEXT NOT NULL,
        home_star TEXT NOT NULL,
        mass REAL NOT NULL,
        radius REAL NOT NULL,
        distance REAL NOT NULL
    )
    "#,
];

const DROP_TABLES: &[&str] = &["DROP TABLE IF EXISTS planets", "DROP TABLE IF EXISTS users"];

/// Create both tables. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("database tables ensured");
    Ok(())
}

/// Drop both tables and all their rows.
pub async fn drop_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DROP_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("database tables dropped");
    Ok(())
}
