//! Dashboard handlers. Every route here sits behind `require_auth` and only
//! ever touches notes owned by the authenticated user.

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

use axum::response::Redirect;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::NoteDraft;

pub use add::{add_form, add_submit};
pub use delete::delete_note;
pub use list::dashboard;
pub use search::{search_page, search_submit};
pub use update::update_note;
pub use view::view_note;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Form body for create and update. Extra fields (e.g. a spoofed `user`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NoteForm {
    pub fn into_draft(self) -> Result<NoteDraft, ApiError> {
        let mut missing = Vec::new();
        let title = required(self.title, "title", &mut missing);
        let body = required(self.body, "body", &mut missing);

        match (title, body) {
            (Some(title), Some(body)) => Ok(NoteDraft { title, body }),
            _ => Err(ApiError::validation_error("Missing required fields", missing)),
        }
    }
}

/// Absent and empty values are missing; whitespace is kept as typed
fn required(value: Option<String>, field: &str, missing: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field.to_string());
            None
        }
    }
}

/// Note ids that are not UUIDs can never match a stored note
pub fn parse_note_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

pub fn back_to_dashboard() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}
