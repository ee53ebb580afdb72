use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Connection pool for the resume-record store. The database only sees one
/// short insert and occasional lookups per resume; the heavy work (generation,
/// rendering) happens elsewhere, so a small pool is plenty.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Failed to connect to the resume database")?;

    info!("Resume database pool ready");
    Ok(pool)
}
