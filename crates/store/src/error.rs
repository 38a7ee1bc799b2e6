//! Store-layer error model.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures at the backing-store boundary.
///
/// Callers on the read path degrade these to empty results (fail-soft);
/// callers on the write path surface them as a generic failure message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("object storage transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("object storage error: {0}")]
    Storage(String),

    /// Upload target already exists and the conflict policy is
    /// "do not overwrite".
    #[error("object already exists: {0}")]
    ObjectExists(String),
}
