//! Storage Layer
//!
//! Provides SQLite persistence with repository pattern.

mod repository;

pub use repository::{HistoryRecord, NewSubmission, Repository, HISTORY_COLUMNS};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
