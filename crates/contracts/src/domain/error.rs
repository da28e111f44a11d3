use thiserror::Error;

/// Failure taxonomy of the product service and its persistence layer.
///
/// `NotFound` is returned by update only; deleting an absent id is a
/// deliberate no-op. Persistence failures are surfaced to the user, never
/// silently recovered by reseeding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Product not found")]
    NotFound,

    /// Stored collection exists but cannot be deserialized
    #[error("Stored catalog is unreadable: {0}")]
    Persistence(String),

    /// The browser storage itself is missing or refused the operation
    #[error("Browser storage is unavailable: {0}")]
    Storage(String),
}
