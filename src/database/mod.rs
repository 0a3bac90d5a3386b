pub mod manager;
pub mod memory;
pub mod models;
pub mod notes;
pub mod store;

pub use manager::DatabaseManager;
pub use memory::MemoryNoteStore;
pub use notes::PgNoteStore;
pub use store::{NoteStore, StoreError};
