use crate::error::Result;
use async_trait::async_trait;
use linkshorty_core::{ShortCode, UrlRecord};

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores a URL under a freshly generated short code and returns the
    /// code.
    ///
    /// The URL is stored verbatim. Fails only when no free code could be
    /// found within the configured retry bound.
    async fn shorten(&self, original_url: String) -> Result<ShortCode>;

    /// Resolves a short code to its stored URL record.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;
}
