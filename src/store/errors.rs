//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by document store backends.
///
/// Callers do not distinguish failure causes; the HTTP layer maps every
/// store error to a generic 500 and logs the full chain server-side.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection string could not be parsed into connect options.
    /// This is the only construction-time failure; an unreachable
    /// database surfaces later, per query.
    #[error("invalid connection string: {0}")]
    InvalidConnectionString(#[source] sqlx::Error),

    /// Any failure reported by the backing database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
