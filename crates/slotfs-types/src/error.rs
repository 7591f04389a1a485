//! Store result codes.

use thiserror::Error;

/// Failure codes returned by entry table primitives.
///
/// The store never retries and never aborts; callers decide what a failure
/// means to the user. There is deliberately no "directory not empty" code:
/// the table keeps no child counts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No live entry matches the resolved path.
    #[error("not found: {0}")]
    NotFound(String),

    /// No free slot is left for a new entry.
    #[error("capacity exceeded: no free slot for {path} ({capacity} slots in use)")]
    CapacityExceeded { path: String, capacity: usize },
}

impl StoreError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn capacity_exceeded(path: impl Into<String>, capacity: usize) -> Self {
        Self::CapacityExceeded {
            path: path.into(),
            capacity,
        }
    }

    /// True for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for [`StoreError::CapacityExceeded`].
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Result alias for store primitives.
pub type Result<T> = std::result::Result<T, StoreError>;
