use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Row, SqlitePool,
};
use std::str::FromStr;

use crate::{domain::errors::StateError, ports::state::StateStore};

/// SQLite-backed implementation of StateStore; state survives restarts
#[derive(Clone)]
pub struct SqlStateStore {
    pool: SqlitePool,
}

impl SqlStateStore {
    /// Open (creating if needed) the database at `url`, e.g. `sqlite://state.db`
    pub async fn connect(url: &str) -> Result<Self, StateError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| db_error("Invalid state database URL", e))?
            .create_if_missing(true);

        // A single connection keeps `sqlite::memory:` databases shared
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| db_error("Database error connecting to state store", e))?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the state table if needed
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StateError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS key_value (
                name TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| db_error("Database error creating state table", e))?;

        Ok(Self { pool })
    }
}

fn db_error(context: &str, err: sqlx::Error) -> StateError {
    StateError::Backend {
        message: format!("{}: {}", context, err),
    }
}

#[async_trait]
impl StateStore for SqlStateStore {
    async fn get(&self, name: &str) -> Result<Option<String>, StateError> {
        let row = sqlx::query(
            r#"
            SELECT value FROM key_value
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Database error reading state", e))?;

        Ok(row.map(|row| row.get::<String, _>("value")))
    }

    async fn set(&self, name: &str, value: &str) -> Result<(), StateError> {
        sqlx::query(
            r#"
            INSERT INTO key_value (name, value)
            VALUES (?1, ?2)
            ON CONFLICT (name)
            DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Database error writing state", e))?;

        Ok(())
    }

    async fn set_if_absent(&self, name: &str, value: &str) -> Result<String, StateError> {
        sqlx::query(
            r#"
            INSERT INTO key_value (name, value)
            VALUES (?1, ?2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Database error writing state", e))?;

        self.get(name).await?.ok_or_else(|| StateError::Backend {
            message: format!("State entry '{}' vanished after insert", name),
        })
    }

    async fn delete(&self, name: &str) -> Result<bool, StateError> {
        let result = sqlx::query(
            r#"
            DELETE FROM key_value
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Database error deleting state", e))?;

        Ok(result.rows_affected() > 0)
    }
}
