//! Error types for loading and validating the item collection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The item collection violates an identity or shape rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    /// An item has an empty identifier.
    #[error("item at position {index} has no id")]
    MissingId { index: usize },

    /// Two items share the same identifier.
    #[error("duplicate item id {id:?} at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// An item id falls in the namespace reserved for cluster nodes.
    #[error("item id {id:?} uses the reserved prefix {prefix:?}")]
    ReservedId { id: String, prefix: &'static str },

    /// An item carries more tag slots than there are dimensions.
    #[error("item has {count} tag slots, at most 4 are allowed")]
    TooManyTagSlots { count: usize },
}

/// Errors that can occur while loading the item collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The records were read but failed validation.
    #[error("data integrity error: {0}")]
    Integrity(#[from] DataIntegrityError),

    /// The records could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A grouping choice did not name a known dimension.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grouping dimension: {0:?}")]
pub struct UnknownDimension(pub String);
