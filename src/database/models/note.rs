use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Dashboard previews keep at most this many characters of the title
pub const TITLE_PREVIEW_CHARS: usize = 30;

/// Dashboard previews keep at most this many characters of the body
pub const BODY_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

/// Shortened projection shown on the dashboard listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePreview {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

impl From<&Note> for NotePreview {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: truncate_chars(&note.title, TITLE_PREVIEW_CHARS),
            body: truncate_chars(&note.body, BODY_PREVIEW_CHARS),
        }
    }
}

/// Keep the first `max` characters of `s`. Never splits a multi-byte character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
