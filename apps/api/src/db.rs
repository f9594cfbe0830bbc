use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS resumes (
    id          TEXT PRIMARY KEY,
    position    INTEGER NOT NULL,
    data        TEXT NOT NULL,
    updated_at  TEXT NOT NULL
)
"#;

/// Creates the SQLite connection pool and ensures the schema exists.
///
/// An in-memory database lives only as long as its connection, so it is
/// pinned to a single connection that is never recycled.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening resume database...");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::query(SCHEMA)
        .execute(&pool)
        .await
        .context("Failed to create resumes table")?;

    info!("Resume database ready");
    Ok(pool)
}
