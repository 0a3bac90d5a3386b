use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::models::{NewNote, Note, NoteChanges, NotePreview};
use crate::database::{NoteStore, StoreError};

/// Dashboard page size
pub const NOTES_PER_PAGE: u32 = 12;

/// Validated title/body pair for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub notes: Vec<NotePreview>,
    pub current: u32,
    pub pages: u64,
}

/// Per-user note operations on top of a `NoteStore`
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn dashboard(&self, user_id: Uuid, page: u32) -> Result<DashboardPage, StoreError> {
        let page = page.max(1);
        let notes = self
            .store
            .list_for_user(user_id, page_offset(page, NOTES_PER_PAGE), i64::from(NOTES_PER_PAGE))
            .await?;
        let total = self.store.count_for_user(user_id).await?;

        tracing::debug!("Dashboard page {} for {}: {} of {} notes", page, user_id, notes.len(), total);

        Ok(DashboardPage {
            notes: notes.iter().map(NotePreview::from).collect(),
            current: page,
            pages: page_count(u64::try_from(total).unwrap_or(0), u64::from(NOTES_PER_PAGE)),
        })
    }

    pub async fn view(&self, user_id: Uuid, id: Uuid) -> Result<Option<Note>, StoreError> {
        self.store.find_for_user(id, user_id).await
    }

    /// Replace title/body and bump `updated_at`. No-op when the note is not the user's.
    pub async fn update(&self, user_id: Uuid, id: Uuid, draft: NoteDraft) -> Result<bool, StoreError> {
        let changes = NoteChanges {
            title: draft.title,
            body: draft.body,
            updated_at: Utc::now(),
        };
        let matched = self.store.update_for_user(id, user_id, changes).await?;
        if matched {
            tracing::info!("Updated note {} for {}", id, user_id);
        } else {
            tracing::debug!("Update of note {} for {} matched nothing", id, user_id);
        }
        Ok(matched)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let matched = self.store.delete_for_user(id, user_id).await?;
        if matched {
            tracing::info!("Deleted note {} for {}", id, user_id);
        }
        Ok(matched)
    }

    pub async fn create(&self, user_id: Uuid, draft: NoteDraft) -> Result<Note, StoreError> {
        let note = self
            .store
            .insert(NewNote {
                user_id,
                title: draft.title,
                body: draft.body,
            })
            .await?;
        tracing::info!("Created note {} for {}", note.id, user_id);
        Ok(note)
    }

    pub async fn search(&self, user_id: Uuid, raw_term: &str) -> Result<Vec<Note>, StoreError> {
        let term = sanitize_search_term(raw_term);
        let results = self.store.search_for_user(user_id, &term).await?;
        tracing::debug!("Search '{}' for {} returned {} notes", term, user_id, results.len());
        Ok(results)
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.health_check().await
    }
}

/// ceil(total / per_page)
pub fn page_count(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page)
}

/// Rows to skip for a 1-based page
pub fn page_offset(page: u32, per_page: u32) -> i64 {
    i64::from(page.max(1) - 1) * i64::from(per_page)
}

/// Missing, malformed or zero pages fall back to the first page
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Keep only ASCII letters, digits and spaces
pub fn sanitize_search_term(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
