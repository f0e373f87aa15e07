use std::{
    sync::{Mutex, MutexGuard},
    time::SystemTime,
};

use super::{new_note_id, Store};
use crate::{
    errors::ServerError,
    models::{
        note::{NewNote, Note, NoteChanges},
        user::User,
    },
};

#[derive(Default)]
struct Collections {
    notes: Vec<Note>,
    users: Vec<User>,
}

/// Process-local store keeping notes in insertion order. Every trait call
/// takes the lock once, so check-then-write sequences in the handlers are
/// no more atomic here than they are against postgres.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = MemoryStore::default();
        if let Ok(mut inner) = store.inner.lock() {
            inner.users.extend(users);
        }
        store
    }

    pub fn insert_user(&self, user: User) -> Result<(), ServerError> {
        let mut inner = self.lock()?;
        inner.users.retain(|u| u.id != user.id);
        inner.users.push(user);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, ServerError> {
        self.inner.lock().map_err(|_| ServerError::StoreError)
    }
}

impl Store for MemoryStore {
    fn all_notes(&self) -> Result<Vec<Note>, ServerError> {
        Ok(self.lock()?.notes.clone())
    }

    fn find_note(&self, id: &str) -> Result<Option<Note>, ServerError> {
        Ok(self.lock()?.notes.iter().find(|n| n.id == id).cloned())
    }

    fn find_note_by_title(&self, title: &str) -> Result<Option<Note>, ServerError> {
        Ok(self.lock()?.notes.iter().find(|n| n.title == title).cloned())
    }

    fn insert_note(&self, note: NewNote) -> Result<Note, ServerError> {
        let time_now = SystemTime::now();
        let note = Note {
            id: new_note_id(),
            user_id: note.user_id,
            title: note.title,
            text: note.text,
            completed: false,
            created_at: time_now,
            updated_at: time_now,
        };
        self.lock()?.notes.push(note.clone());
        Ok(note)
    }

    fn update_note(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>, ServerError> {
        let mut inner = self.lock()?;
        Ok(inner.notes.iter_mut().find(|n| n.id == id).map(|note| {
            note.user_id = changes.user_id;
            note.title = changes.title;
            note.text = changes.text;
            note.completed = changes.completed;
            note.updated_at = SystemTime::now();
            note.clone()
        }))
    }

    fn delete_note(&self, id: &str) -> Result<Option<Note>, ServerError> {
        let mut inner = self.lock()?;
        let position = inner.notes.iter().position(|n| n.id == id);
        Ok(position.map(|index| inner.notes.remove(index)))
    }

    fn find_user(&self, id: &str) -> Result<Option<User>, ServerError> {
        Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, ServerError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}
