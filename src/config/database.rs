//! Database configuration and connection pool initialization.
//!
//! The store is a SQLite database whose location is read from the
//! `DATABASE_URL` environment variable. Pending migrations from
//! `./migrations` are applied before the pool is handed out.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default `sqlite://rollcall.db?mode=rwc`)
//!
//! # Example
//!
//! ```ignore
//! use crate::config::database::init_db_pool;
//!
//! let pool = init_db_pool().await?;
//! ```

use std::env;
use std::str::FromStr;

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://rollcall.db?mode=rwc";

pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Connects to the SQLite store and runs migrations.
///
/// Foreign keys are switched on for every connection so that profile,
/// attendance and leave rows can only reference existing parents.
pub async fn init_db_pool() -> anyhow::Result<SqlitePool> {
    let url = database_url();

    let options = SqliteConnectOptions::from_str(&url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database at {}", url))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
