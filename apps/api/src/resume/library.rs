use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Document;
use crate::resume::store::ResumeStore;

/// The saved-resumes list, loaded once at startup and changed only by `save`.
///
/// The store is passed in explicitly on every call that touches persistence.
#[derive(Debug, Default)]
pub struct ResumeLibrary {
    resumes: Vec<Document>,
}

impl ResumeLibrary {
    pub async fn load(store: &dyn ResumeStore) -> Result<Self, AppError> {
        let resumes = store.load_all().await?;
        info!("Resume library loaded with {} saved resumes", resumes.len());
        Ok(Self { resumes })
    }

    pub fn list(&self) -> &[Document] {
        &self.resumes
    }

    pub fn get(&self, id: Uuid) -> Option<&Document> {
        self.resumes.iter().find(|r| r.id == id)
    }

    /// Refreshes `updated_at`, writes through to the store, then upserts into
    /// the in-memory list (replacing in place, or appending a new id).
    ///
    /// The list is left untouched when the store write fails.
    pub async fn save(
        &mut self,
        store: &dyn ResumeStore,
        mut document: Document,
        now: DateTime<Utc>,
    ) -> Result<Document, AppError> {
        document.touch(now);
        store.upsert(&document).await?;

        match self.resumes.iter_mut().find(|r| r.id == document.id) {
            Some(existing) => *existing = document.clone(),
            None => self.resumes.push(document.clone()),
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::resume::store::SqliteResumeStore;
    use async_trait::async_trait;
    use chrono::Duration;

    async fn memory_store() -> SqliteResumeStore {
        SqliteResumeStore::new(create_pool("sqlite::memory:").await.unwrap())
    }

    struct FailingStore;

    #[async_trait]
    impl ResumeStore for FailingStore {
        async fn load_all(&self) -> Result<Vec<Document>, AppError> {
            Ok(Vec::new())
        }

        async fn upsert(&self, _document: &Document) -> Result<(), AppError> {
            Err(AppError::Internal(anyhow::anyhow!("disk full")))
        }
    }

    #[tokio::test]
    async fn test_save_refreshes_updated_at_and_appends() {
        let store = memory_store().await;
        let mut library = ResumeLibrary::load(&store).await.unwrap();

        let created = Utc::now();
        let doc = Document::new(created);
        let later = created + Duration::minutes(3);
        let saved = library.save(&store, doc, later).await.unwrap();

        assert_eq!(saved.updated_at, later);
        assert_eq!(saved.created_at, created);
        assert_eq!(library.list().len(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_replaces_in_place() {
        let store = memory_store().await;
        let mut library = ResumeLibrary::default();
        let a = library.save(&store, Document::new(Utc::now()), Utc::now()).await.unwrap();
        let b = library.save(&store, Document::new(Utc::now()), Utc::now()).await.unwrap();

        let mut edited = a.clone();
        edited.personal_info.full_name = "Edited".to_string();
        library.save(&store, edited, Utc::now()).await.unwrap();

        let ids: Vec<_> = library.list().iter().map(|d| d.id).collect();
        assert_eq!(ids, [a.id, b.id]);
        assert_eq!(library.get(a.id).unwrap().personal_info.full_name, "Edited");
    }

    #[tokio::test]
    async fn test_library_reloads_from_store() {
        let store = memory_store().await;
        let mut library = ResumeLibrary::default();
        let saved = library.save(&store, Document::new(Utc::now()), Utc::now()).await.unwrap();

        let reloaded = ResumeLibrary::load(&store).await.unwrap();
        assert_eq!(reloaded.list(), library.list());
        assert!(reloaded.get(saved.id).is_some());
    }

    #[tokio::test]
    async fn test_failed_store_write_leaves_list_unchanged() {
        let mut library = ResumeLibrary::default();
        let result = library
            .save(&FailingStore, Document::new(Utc::now()), Utc::now())
            .await;
        assert!(result.is_err());
        assert!(library.list().is_empty());
    }
}
