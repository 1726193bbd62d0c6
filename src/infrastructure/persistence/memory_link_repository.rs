//! In-memory implementation of the link repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::domain::entities::{ClickEvent, UrlRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local URL registry.
///
/// Records live in an insertion-ordered `Vec` behind a single `RwLock`; every
/// operation takes the lock once and finishes before releasing it. Nothing is
/// persisted, so the registry starts empty on every launch.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    records: RwLock<Vec<UrlRecord>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn add_many(&self, records: Vec<UrlRecord>) -> Result<(), AppError> {
        let mut stored = self.records.write().await;

        let mut incoming = HashSet::with_capacity(records.len());
        for record in &records {
            let code = record.short_code.as_str();
            let taken = stored.iter().any(|r| r.short_code.as_str() == code);

            if taken || !incoming.insert(code) {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": code }),
                ));
            }
        }

        stored.extend(records);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let stored = self.records.read().await;

        Ok(stored
            .iter()
            .find(|r| r.short_code.as_str() == code)
            .cloned())
    }

    async fn record_click(&self, id: &str, click: ClickEvent) -> Result<bool, AppError> {
        let mut stored = self.records.write().await;

        match stored.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.clicks.push(click);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &str) -> Result<bool, AppError> {
        let mut stored = self.records.write().await;

        let before = stored.len();
        stored.retain(|r| r.id != id);

        Ok(stored.len() != before)
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortCode;
    use chrono::{Duration, Utc};

    fn record(code: &str) -> UrlRecord {
        let now = Utc::now();
        UrlRecord::new(
            ShortCode::parse(code).unwrap(),
            format!("https://example.com/{code}"),
            now,
            now + Duration::minutes(30),
        )
    }

    #[tokio::test]
    async fn test_add_many_rejects_intra_batch_duplicate() {
        let repo = InMemoryLinkRepository::new();

        let result = repo.add_many(vec![record("dup"), record("dup")]).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_many_is_all_or_nothing() {
        let repo = InMemoryLinkRepository::new();
        repo.add_many(vec![record("taken")]).await.unwrap();

        let result = repo.add_many(vec![record("fresh"), record("taken")]).await;

        assert!(result.is_err());
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.find_by_code("fresh").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryLinkRepository::new();
        repo.add_many(vec![record("c1"), record("c2")]).await.unwrap();
        repo.add_many(vec![record("c0")]).await.unwrap();

        let codes: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(codes, vec!["c1", "c2", "c0"]);
    }

    #[tokio::test]
    async fn test_find_by_code_is_case_sensitive() {
        let repo = InMemoryLinkRepository::new();
        repo.add_many(vec![record("AbC")]).await.unwrap();

        assert!(repo.find_by_code("AbC").await.unwrap().is_some());
        assert!(repo.find_by_code("abc").await.unwrap().is_none());
    }
}
