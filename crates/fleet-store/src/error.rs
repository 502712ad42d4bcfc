//! Error types for fleet-store.

use thiserror::Error;

/// Failures at the store boundary.
///
/// All variants are transient from the scheduler's point of view: a failing
/// call is logged, the affected vehicle (or tick) is skipped, and the next
/// tick retries.  A missing route is **not** an error — `route_by_name`
/// returns `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
