//! Connection pool and table bootstrap. The backend is chosen at runtime from the connection string.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(ConfigError::UnsupportedDatabase(redact(url)))
        }
    }

    /// Column definition for an auto-incrementing 64-bit primary key.
    fn serial_primary_key(self) -> &'static str {
        match self {
            Backend::Postgres => "\"id\" BIGSERIAL PRIMARY KEY",
            Backend::Sqlite => "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

/// Keep only the scheme so credentials never reach logs or error bodies.
fn redact(url: &str) -> String {
    match url.split_once(':') {
        Some((scheme, _)) => format!("{}:...", scheme),
        None => "<unparsable>".into(),
    }
}

/// In-memory SQLite lives inside a single connection, so the pool is pinned to one connection that never expires.
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

pub async fn connect(settings: &Settings) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let mut options = AnyPoolOptions::new().max_connections(settings.max_connections);
    if settings.backend == Backend::Sqlite && is_in_memory(&settings.database_url) {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }
    let pool = options.connect(&settings.database_url).await?;
    tracing::info!(backend = ?settings.backend, "database pool ready");
    Ok(pool)
}

/// Create the five inventory tables if they do not exist. Idempotent; there is no schema versioning.
/// References between tables are plain ids without foreign-key constraints.
pub async fn ensure_inventory_tables(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    let pk = backend.serial_primary_key();
    let ddl = [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "products" (
                {},
                "item" TEXT NOT NULL,
                "description" TEXT NOT NULL,
                "quantity" BIGINT NOT NULL DEFAULT 0
            )
            "#,
            pk
        ),
        format!(r#"CREATE TABLE IF NOT EXISTS "purchases" ({})"#, pk),
        format!(r#"CREATE TABLE IF NOT EXISTS "sales" ({})"#, pk),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "transactions" (
                {},
                "purchases_id" BIGINT,
                "products_id" BIGINT NOT NULL,
                "sales_id" BIGINT,
                "quantity" BIGINT NOT NULL,
                "warehouses_id" BIGINT
            )
            "#,
            pk
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "warehouses" (
                {},
                "name" TEXT NOT NULL,
                "location" TEXT
            )
            "#,
            pk
        ),
    ];
    for statement in &ddl {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("inventory tables ensured");
    Ok(())
}
