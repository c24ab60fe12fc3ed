// ABOUTME: Error types for tag operations
// ABOUTME: Slug collisions, owner resolution failures, and storage propagation

use cookbook_storage::StorageError;
use thiserror::Error;

pub type TagResult<T> = Result<T, TagError>;

#[derive(Error, Debug)]
pub enum TagError {
    /// Insert hit the unique index on `slug`. Retryable with a fresh suffix.
    #[error("slug '{slug}' already exists")]
    SlugCollision { slug: String },

    #[error("unknown owner type: {0}")]
    UnknownOwnerType(String),

    #[error("invalid tag name: {0}")]
    InvalidName(String),

    #[error("tag not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<sqlx::Error> for TagError {
    fn from(err: sqlx::Error) -> Self {
        TagError::Storage(StorageError::Sqlx(err))
    }
}
