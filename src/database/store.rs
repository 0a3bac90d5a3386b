use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{NewNote, Note, NoteChanges};

/// Errors surfaced by any `NoteStore` backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Invalid pagination window: offset={offset} limit={limit}")]
    InvalidWindow { offset: i64, limit: i64 },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam for notes.
///
/// Every per-note operation takes the owning user's id and must only match
/// rows belonging to that user. Listings and searches are ordered by
/// `updated_at` descending, ties broken by `id` descending.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// One page of the user's notes, most recently updated first.
    async fn list_for_user(&self, user_id: Uuid, offset: i64, limit: i64) -> Result<Vec<Note>, StoreError>;

    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, StoreError>;

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError>;

    /// Returns whether a note matched.
    async fn update_for_user(&self, id: Uuid, user_id: Uuid, changes: NoteChanges) -> Result<bool, StoreError>;

    /// Returns whether a note matched.
    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, StoreError>;

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError>;

    /// Case-insensitive substring match on title or body. `term` must already
    /// be sanitized; an empty term matches every note of the user.
    async fn search_for_user(&self, user_id: Uuid, term: &str) -> Result<Vec<Note>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
