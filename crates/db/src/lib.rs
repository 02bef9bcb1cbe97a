//! Persistence engine for the Quill note service.
//!
//! Owns pool construction, schema migrations, the default-category seed,
//! and the model/repository layers. Nothing outside this crate touches the
//! database directly.

pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use quill_core::notes::DEFAULT_CATEGORIES;
use quill_core::types::now;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the file if it
/// does not exist. Foreign keys are enforced on every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database answers queries.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations. Safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Seed the fixed default categories, only when zero categories exist.
///
/// Returns the number of categories inserted (0 when the table already has
/// rows, so restarts never duplicate the seed).
pub async fn seed_default_categories(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let created_at = now();
    for (name, color) in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categories (name, color, created_at) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(color)
            .bind(created_at)
            .execute(pool)
            .await?;
    }

    tracing::info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}
