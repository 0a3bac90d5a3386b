pub mod note_service;

pub use note_service::{DashboardPage, NoteDraft, NoteService, NOTES_PER_PAGE};
