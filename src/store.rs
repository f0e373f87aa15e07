use crate::{
    errors::ServerError,
    models::{
        note::{NewNote, Note, NoteChanges},
        user::User,
    },
};

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::{PgStore, Pool};

/// Persistence operations the handlers rely on. Each call is a separate
/// round trip; nothing here spans a transaction.
pub trait Store: Send + Sync {
    fn all_notes(&self) -> Result<Vec<Note>, ServerError>;
    fn find_note(&self, id: &str) -> Result<Option<Note>, ServerError>;
    fn find_note_by_title(&self, title: &str) -> Result<Option<Note>, ServerError>;
    fn insert_note(&self, note: NewNote) -> Result<Note, ServerError>;
    /// Overwrites the mutable fields of note `id` and bumps `updated_at`.
    fn update_note(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, ServerError>;
    fn delete_note(&self, id: &str) -> Result<Option<Note>, ServerError>;

    fn find_user(&self, id: &str) -> Result<Option<User>, ServerError>;
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, ServerError>;
}

pub(crate) fn new_note_id() -> String {
    nanoid::nanoid!(12)
}
