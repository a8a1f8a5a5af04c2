//! services/api/src/adapters/kv_pg.rs
//!
//! The PostgreSQL adapter, the concrete implementation of the `KeyValueStore`
//! port from the `core` crate. Every key is one row of `kv_entries`; batch
//! writes run inside a single transaction.

use async_trait::async_trait;
use catalog_core::ports::{KeyValueStore, PortError, PortResult};
use sqlx::PgPool;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `KeyValueStore` port.
#[derive(Clone)]
pub struct PgKeyValueStore {
    pool: PgPool,
}

impl PgKeyValueStore {
    /// Creates a new `PgKeyValueStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

const UPSERT: &str = "INSERT INTO kv_entries (key, value, updated_at) VALUES ($1, $2, now()) \
     ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()";

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// `KeyValueStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl KeyValueStore for PgKeyValueStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_entries WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)
    }

    async fn set(&self, key: &str, value: String) -> PortResult<()> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        sqlx::query("DELETE FROM kv_entries WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    async fn write_batch(&self, entries: Vec<(String, String)>) -> PortResult<()> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;
        for (key, value) in entries {
            sqlx::query(UPSERT)
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await
                .map_err(unexpected)?;
        }
        // Dropping `tx` on an early return rolls the whole batch back.
        tx.commit().await.map_err(unexpected)?;
        Ok(())
    }
}
