// src/engine/error.rs

use crate::store::StoreError;

/// Failures signalled by the engine and the store behind it.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A scoped query matched nothing (unknown category, empty listing, page beyond range).
    #[error("resource not found")]
    NotFound,

    /// Every question in the quiz pool has already been played.
    #[error("no questions left in the quiz pool")]
    Exhausted,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
