use crate::error::{Result, StorageError};
use crate::repository::{ReadRepository, Repository};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use linkshorty_core::{ShortCode, UrlRecord};

/// In-memory implementation of the [`Repository`] trait using DashMap.
///
/// DashMap provides better concurrency than `RwLock<HashMap>` because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Inserts go through the vacant-entry API, so the
/// membership check and the write happen under one shard lock.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the repository holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.storage.get(code.as_str()).map(|r| r.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(url: &str) -> UrlRecord {
        UrlRecord::new(url)
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(&code("abc123"), record("https://other.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn conflict_never_overwrites() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();
        let _ = repo
            .insert(&code("abc123"), record("https://other.com"))
            .await;

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn same_url_under_two_codes() {
        // Uniqueness is keyed on the code only; the reverse direction is
        // unconstrained.
        let repo = InMemoryRepository::new();

        repo.insert(&code("aaa111"), record("https://example.com"))
            .await
            .unwrap();
        repo.insert(&code("bbb222"), record("https://example.com"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn exists_checks() {
        let repo = InMemoryRepository::new();

        assert!(!repo.exists(&code("abc123")).await.unwrap());

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        assert!(repo.exists(&code("abc123")).await.unwrap());
    }

    #[tokio::test]
    async fn repeated_get_is_stable() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        for _ in 0..3 {
            let result = repo.get(&code("abc123")).await.unwrap().unwrap();
            assert_eq!(result.original_url, "https://example.com");
        }
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code{:03}", i));
                repo.insert(&c, UrlRecord::new(format!("https://example{}.com", i)))
                    .await
                    .unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code{:03}", i));
                let _ = repo.get(&c).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new_unchecked(format!("code{:03}", i));
            let result = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
    }

    #[tokio::test]
    async fn concurrent_inserts_of_same_code_admit_exactly_one() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(
                    &ShortCode::new_unchecked("same01"),
                    UrlRecord::new(format!("https://example{}.com", i)),
                )
                .await
            }));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                wins += 1;
            }
        }

        assert_eq!(wins, 1);
        assert_eq!(repo.len(), 1);
    }
}
