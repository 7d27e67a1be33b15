use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The 62-symbol alphabet short codes are drawn from.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default length of generated short codes.
///
/// Six symbols over the 62-symbol alphabet give 62^6 (~56.8 billion)
/// possible values.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// An opaque identifier for a stored URL mapping.
///
/// Codes are never parsed or decoded; the only structure they carry is the
/// alphabet they are drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    ///
    /// Valid codes are non-empty and contain only alphabet characters
    /// (`0-9A-Za-z`). Anything else can never name a stored mapping.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (generators that draw from the alphabet).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "must not be empty".to_string(),
            ));
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only alphanumeric characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("abc123").is_ok());
        assert!(ShortCode::new("ZZZZZZ").is_ok());
        assert!(ShortCode::new("a").is_ok());
    }

    #[test]
    fn empty_code_rejected() {
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("abc def").is_err());
        assert!(ShortCode::new("abc/def").is_err());
        assert!(ShortCode::new("abc-def").is_err());
        assert!(ShortCode::new("abc_def").is_err());
    }

    #[test]
    fn display() {
        let code = ShortCode::new("xYz789").unwrap();
        assert_eq!(code.to_string(), "xYz789");
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(code.to_url("https://link.sho"), "https://link.sho/abc123");
        assert_eq!(code.to_url("https://link.sho/"), "https://link.sho/abc123");
    }

    #[test]
    fn alphabet_has_62_unique_symbols() {
        let unique: std::collections::HashSet<_> = ALPHABET.chars().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(unique.len(), 62);
    }
}
