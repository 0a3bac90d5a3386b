use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::database::models::{Note, NotePreview};
use crate::services::DashboardPage;

/// Canonical path of a single note
pub fn note_path(id: Uuid) -> String {
    format!("/dashboard/item/{}", id)
}

/// Full note in wire format: { id, title, body, created_at, updated_at, links }
pub fn note_to_api_value(note: &Note) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), Value::String(note.id.to_string()));
    obj.insert("title".into(), Value::String(note.title.clone()));
    obj.insert("body".into(), Value::String(note.body.clone()));
    obj.insert("created_at".into(), Value::String(note.created_at.to_rfc3339()));
    obj.insert("updated_at".into(), Value::String(note.updated_at.to_rfc3339()));
    obj.insert("links".into(), json!({ "self": note_path(note.id) }));
    Value::Object(obj)
}

pub fn notes_to_api_values(notes: &[Note]) -> Vec<Value> {
    notes.iter().map(note_to_api_value).collect()
}

/// Dashboard preview: only the truncated title/body plus a link to the full note
pub fn preview_to_api_value(preview: &NotePreview) -> Value {
    json!({
        "id": preview.id,
        "title": preview.title,
        "body": preview.body,
        "links": { "self": note_path(preview.id) }
    })
}

pub fn dashboard_to_api_value(user_name: &str, page: &DashboardPage) -> Value {
    json!({
        "user_name": user_name,
        "notes": page.notes.iter().map(preview_to_api_value).collect::<Vec<_>>(),
        "current": page.current,
        "pages": page.pages,
    })
}
