use crate::error::{Result, ShortenerError};
use crate::shortener::Shortener;
use async_trait::async_trait;
use linkshorty_core::{ShortCode, UrlRecord};
use linkshorty_generator::Generator;
use linkshorty_storage::{Repository, StorageError};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Default bound on collision retries before an insert gives up.
///
/// With the 62^6 code space a single retry is already rare; the bound only
/// matters as the space saturates, where it turns an unbounded loop into a
/// failed request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 32;

/// A concrete implementation of the `Shortener` trait.
///
/// Wraps a `Repository` and a `Generator` and runs the insertion protocol:
/// draw a candidate code, attempt an atomic check-and-insert, and on
/// collision discard the candidate and draw again — rejection sampling over
/// the code space, bounded by `max_attempts`.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with the default retry bound.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_max_attempts(repository, generator, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a service with a custom collision retry bound.
    ///
    /// A bound of zero would make every shorten fail; it is clamped to one.
    pub fn with_max_attempts(repository: R, generator: G, max_attempts: u32) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            max_attempts: max_attempts.max(1),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: String) -> Result<ShortCode> {
        let record = UrlRecord::new(original_url);

        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            // Insert doubles as the membership check: `Conflict` means the
            // candidate was taken, anything else committed it atomically.
            match self.repository.insert(&candidate, record.clone()).await {
                Ok(()) => {
                    debug!(code = %candidate, attempt, "stored new mapping");
                    return Ok(candidate);
                }
                Err(StorageError::Conflict(_)) => {
                    trace!(code = %candidate, attempt, "candidate collided, retrying");
                }
                Err(other) => return Err(ShortenerError::Storage(other.to_string())),
            }
        }

        warn!(
            max_attempts = self.max_attempts,
            "no free short code found, code space looks saturated"
        );
        Err(ShortenerError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        trace!(code = %code, "resolving short code");
        self.repository
            .get(code)
            .await
            .map_err(|e| ShortenerError::Storage(e.to_string()))
    }
}
