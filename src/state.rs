use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::NoteStore;
use crate::services::NoteService;

/// Shared per-router state
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>, config: AppConfig) -> Self {
        Self {
            notes: NoteService::new(store),
            config: Arc::new(config),
        }
    }
}
