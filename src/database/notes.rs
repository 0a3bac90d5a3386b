//! PostgreSQL note store.
//!
//! Expects the `notes` table from `sql/notes.sql`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{NewNote, Note, NoteChanges};
use crate::database::store::{NoteStore, StoreError};

const NOTE_COLUMNS: &str = "id, user_id, title, body, created_at, updated_at";

pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn list_for_user(&self, user_id: Uuid, offset: i64, limit: i64) -> Result<Vec<Note>, StoreError> {
        if offset < 0 || limit < 0 {
            return Err(StoreError::InvalidWindow { offset, limit });
        }

        let query = format!(
            "SELECT {} FROM notes WHERE user_id = $1 ORDER BY updated_at DESC, id DESC LIMIT $2 OFFSET $3",
            NOTE_COLUMNS
        );

        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(notes)
    }

    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError> {
        let query = format!("SELECT {} FROM notes WHERE id = $1 AND user_id = $2", NOTE_COLUMNS);

        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    async fn update_for_user(&self, id: Uuid, user_id: Uuid, changes: NoteChanges) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE notes SET title = $3, body = $4, updated_at = $5 WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(&changes.title)
        .bind(&changes.body)
        .bind(changes.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO notes ({}) VALUES ($1, $2, $3, $4, $5, $5) RETURNING {}",
            NOTE_COLUMNS, NOTE_COLUMNS
        );

        let created = sqlx::query_as::<_, Note>(&query)
            .bind(Uuid::new_v4())
            .bind(note.user_id)
            .bind(&note.title)
            .bind(&note.body)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn search_for_user(&self, user_id: Uuid, term: &str) -> Result<Vec<Note>, StoreError> {
        // Sanitized terms carry no LIKE metacharacters
        let pattern = format!("%{}%", term);
        let query = format!(
            "SELECT {} FROM notes WHERE user_id = $1 AND (title ILIKE $2 OR body ILIKE $2) \
             ORDER BY updated_at DESC, id DESC",
            NOTE_COLUMNS
        );

        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(notes)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
