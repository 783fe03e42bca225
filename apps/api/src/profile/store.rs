//! Profile persistence behind the `ProfileStore` trait.
//!
//! `PgProfileStore` keeps the document in a single JSONB row;
//! `MemoryProfileStore` keeps it in process memory (no database configured,
//! and tests). `AppState` holds an `Arc<dyn ProfileStore>` chosen at startup.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;

/// Row id of the one stored profile.
const SINGLETON_ID: i32 = 1;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The stored document, or `None` before the first save.
    async fn load(&self) -> Result<Option<Value>, AppError>;

    /// Replaces the stored document.
    async fn save(&self, profile: &Value) -> Result<(), AppError>;
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load(&self) -> Result<Option<Value>, AppError> {
        let row: Option<Json<Value>> =
            sqlx::query_scalar("SELECT data FROM profiles WHERE id = $1")
                .bind(SINGLETON_ID)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|Json(data)| data))
    }

    async fn save(&self, profile: &Value) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, data, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (id) DO UPDATE
                SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(Json(profile))
        .execute(&self.pool)
        .await?;

        info!("Stored profile in PostgreSQL");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    profile: RwLock<Option<Value>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Value) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Result<Option<Value>, AppError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &Value) -> Result<(), AppError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}
