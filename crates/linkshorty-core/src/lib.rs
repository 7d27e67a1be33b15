//! Core types for the LinkShorty URL shortener.
//!
//! This crate provides the shared vocabulary used by the generator, the
//! storage layer, and the shortener service.

pub mod error;
pub mod record;
pub mod shortcode;

pub use error::CoreError;
pub use record::UrlRecord;
pub use shortcode::{ShortCode, ALPHABET, DEFAULT_CODE_LENGTH};
