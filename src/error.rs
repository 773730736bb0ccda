//! Error handling types and utilities.

/// A specialized Result type for documenter-index operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when parsing an index literal fails.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source is not a `var <ident> = {...}` assignment.
    #[error("no index binding found; expected `var <ident> = {{...}}`")]
    MissingBinding,
    /// The assigned payload is not valid index JSON.
    #[error("malformed index payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single check failure reported by [`crate::IndexStore::verify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A `method` or `function` record with an empty title.
    #[error("record {index} ({category} at {location:?}) has an empty title")]
    EmptyCallableTitle {
        index: usize,
        category: crate::record::Category,
        location: String,
    },
}
