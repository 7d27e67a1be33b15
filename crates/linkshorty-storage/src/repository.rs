use crate::error::Result;
use async_trait::async_trait;
use linkshorty_core::{ShortCode, UrlRecord};

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Checks whether a short code already exists in the repository.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

/// A repository that also accepts new mappings.
///
/// There is deliberately no update or delete: once committed, a mapping is
/// immutable and lives for the lifetime of the process.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new URL record. Returns `Err(Conflict)` if the code already
    /// exists.
    ///
    /// The membership check and the write must be a single atomic unit, so
    /// two concurrent inserts of the same code can never both succeed.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;
}
