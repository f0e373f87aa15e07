use std::time::{Duration, Instant};

use super::{api::NoteView, cache::QueryCache, entity::EntityTable};

/// How long an unsubscribed notes list stays cached.
pub const NOTES_KEEP_UNUSED_FOR: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    pub fn set_credentials(&mut self, access_token: String) {
        self.token = Some(access_token);
    }

    pub fn log_out(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Everything the client knows. Handed by `&mut` to the API calls that
/// change it.
#[derive(Clone, Debug)]
pub struct ClientState {
    pub auth: AuthState,
    pub notes: QueryCache<EntityTable<NoteView>>,
}

impl Default for ClientState {
    fn default() -> Self {
        ClientState {
            auth: AuthState::default(),
            notes: QueryCache::new(NOTES_KEEP_UNUSED_FOR),
        }
    }
}

impl ClientState {
    pub fn select_all_notes(&self) -> Vec<&NoteView> {
        self.notes.data().map(EntityTable::all).unwrap_or_default()
    }

    pub fn select_note_by_id(&self, id: &str) -> Option<&NoteView> {
        self.notes.data().and_then(|table| table.get(id))
    }

    pub fn select_note_ids(&self) -> &[String] {
        self.notes.data().map(EntityTable::ids).unwrap_or_default()
    }

    pub fn collect_garbage(&mut self, now: Instant) {
        if self.notes.collect_garbage(now) {
            log::debug!("evicted unused notes list");
        }
    }
}
