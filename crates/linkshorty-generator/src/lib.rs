//! Short code generation for the LinkShorty URL shortener.

pub mod random;

use linkshorty_core::ShortCode;

pub use random::{RandomGenerator, RandomGeneratorSettings, SettingsError};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// They make NO uniqueness promise: two calls may return the same code, and
/// collision handling belongs to whoever commits the code to a store.
pub trait Generator: Send + Sync + 'static {
    /// Generates one candidate short code.
    fn generate(&self) -> ShortCode;
}
