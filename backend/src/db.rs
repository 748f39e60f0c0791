use std::str::FromStr;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

/// DbConnection wraps the SQLite pool used for connectivity checks
#[derive(Clone)]
pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    /// Create a lazily connected pool; the database file is created on first
    /// use if missing. Nothing is opened until a query runs.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid DATABASE_URL: {}", url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub fn init_test() -> Result<Self> {
        Self::connect_lazy("sqlite::memory:")
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run `SELECT 1 as ok` and return the rows as JSON objects
    pub async fn ping(&self) -> Result<Value, sqlx::Error> {
        let rows = sqlx::query("SELECT 1 as ok").fetch_all(&self.pool).await?;

        let result = rows
            .iter()
            .map(|row| row.try_get::<i64, _>("ok").map(|ok| json!({ "ok": ok })))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Value::Array(result))
    }
}
