use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::{NewNote, Note, NoteChanges};
use crate::database::store::{NoteStore, StoreError};

/// In-process note store for development and tests
#[derive(Clone, Default)]
pub struct MemoryNoteStore {
    notes: Arc<RwLock<HashMap<Uuid, Note>>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with fully-formed notes (ids and timestamps kept as given)
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let map = notes.into_iter().map(|n| (n.id, n)).collect();
        Self {
            notes: Arc::new(RwLock::new(map)),
        }
    }

    async fn owned_by(&self, user_id: Uuid, matches: impl Fn(&Note) -> bool) -> Vec<Note> {
        let notes = self.notes.read().await;
        let mut owned: Vec<Note> = notes
            .values()
            .filter(|n| n.user_id == user_id && matches(n))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| b.id.cmp(&a.id)));
        owned
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn list_for_user(&self, user_id: Uuid, offset: i64, limit: i64) -> Result<Vec<Note>, StoreError> {
        let (skip, take) = match (usize::try_from(offset), usize::try_from(limit)) {
            (Ok(skip), Ok(take)) => (skip, take),
            _ => return Err(StoreError::InvalidWindow { offset, limit }),
        };

        Ok(self
            .owned_by(user_id, |_| true)
            .await
            .into_iter()
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn count_for_user(&self, user_id: Uuid) -> Result<i64, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes.values().filter(|n| n.user_id == user_id).count() as i64)
    }

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes.get(&id).filter(|n| n.user_id == user_id).cloned())
    }

    async fn update_for_user(&self, id: Uuid, user_id: Uuid, changes: NoteChanges) -> Result<bool, StoreError> {
        let mut notes = self.notes.write().await;
        match notes.get_mut(&id) {
            Some(note) if note.user_id == user_id => {
                note.title = changes.title;
                note.body = changes.body;
                note.updated_at = changes.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let mut notes = self.notes.write().await;
        let owned = notes.get(&id).is_some_and(|n| n.user_id == user_id);
        if owned {
            notes.remove(&id);
        }
        Ok(owned)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let now = Utc::now();
        let created = Note {
            id: Uuid::new_v4(),
            user_id: note.user_id,
            title: note.title,
            body: note.body,
            created_at: now,
            updated_at: now,
        };
        self.notes.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn search_for_user(&self, user_id: Uuid, term: &str) -> Result<Vec<Note>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .owned_by(user_id, |n| {
                n.title.to_lowercase().contains(&needle) || n.body.to_lowercase().contains(&needle)
            })
            .await)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
