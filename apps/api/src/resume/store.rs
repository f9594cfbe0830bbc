//! Resume Store: the persistence collaborator for saved documents.
//!
//! Two operations: a document goes in by upsert, the list keyed by
//! id comes back out. `AppState` holds an `Arc<dyn ResumeStore>`.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::resume::Document;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Every saved document, in the order first saved.
    async fn load_all(&self) -> Result<Vec<Document>, AppError>;

    /// Inserts the document, or replaces the saved one with the same id while
    /// keeping its position.
    async fn upsert(&self, document: &Document) -> Result<(), AppError>;
}

/// SQLite-backed store. Each document is one JSON row.
pub struct SqliteResumeStore {
    pool: SqlitePool,
}

impl SqliteResumeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for SqliteResumeStore {
    async fn load_all(&self) -> Result<Vec<Document>, AppError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, data FROM resumes ORDER BY position ASC")
                .fetch_all(&self.pool)
                .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for (id, data) in rows {
            match serde_json::from_str::<Document>(&data) {
                Ok(doc) => documents.push(doc),
                // A corrupt row must not hide every other saved resume.
                Err(e) => warn!("Skipping unreadable saved resume {id}: {e}"),
            }
        }
        debug!("Loaded {} saved resumes", documents.len());
        Ok(documents)
    }

    async fn upsert(&self, document: &Document) -> Result<(), AppError> {
        let data = serde_json::to_string(document)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO resumes (id, position, data, updated_at)
            VALUES (?, (SELECT COALESCE(MAX(position), -1) + 1 FROM resumes), ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(document.id.to_string())
        .bind(data)
        .bind(document.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!("Upserted resume {}", document.id);
        Ok(())
    }
}
