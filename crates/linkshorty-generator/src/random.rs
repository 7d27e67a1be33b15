use crate::Generator;
use linkshorty_core::{ShortCode, ALPHABET, DEFAULT_CODE_LENGTH};
use rand::Rng;
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Configures a [`RandomGenerator`] instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomGeneratorSettings {
    /// Number of symbols per generated code.
    #[builder(default = DEFAULT_CODE_LENGTH)]
    pub length: usize,

    /// Symbol set codes are drawn from.
    ///
    /// Production uses the full 62-symbol set; tests shrink this to force
    /// collisions on a small code space.
    #[builder(default = ALPHABET)]
    pub alphabet: &'static str,
}

/// Errors returned when generator settings are invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("code length must be at least 1")]
    ZeroLength,
    #[error("alphabet must not be empty")]
    EmptyAlphabet,
}

/// Generates fixed-length codes by uniform random draws over an alphabet.
///
/// Each symbol is chosen independently with the thread-local RNG; the
/// randomness is not security-sensitive. Stateless across calls.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
    alphabet: &'static [u8],
}

impl RandomGenerator {
    /// Creates a generator from validated settings.
    pub fn new(settings: RandomGeneratorSettings) -> Result<Self, SettingsError> {
        if settings.length == 0 {
            return Err(SettingsError::ZeroLength);
        }
        if settings.alphabet.is_empty() {
            return Err(SettingsError::EmptyAlphabet);
        }

        Ok(Self {
            length: settings.length,
            // The alphabet is ASCII, so per-byte indexing is per-symbol.
            alphabet: settings.alphabet.as_bytes(),
        })
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}
