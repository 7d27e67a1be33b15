//! Storage layer for the LinkShorty URL shortener.
//!
//! This crate provides the repository traits and the in-memory backend that
//! holds the short code to URL mapping for the lifetime of the process.

pub mod error;
pub mod memory;
pub mod repository;

pub use error::StorageError;
pub use memory::InMemoryRepository;
pub use repository::{ReadRepository, Repository};
