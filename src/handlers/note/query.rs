use actix_web::{web, HttpResponse};
use std::collections::HashMap;

use crate::{errors::ServerError, models::note::NoteWithUser, AppState};

/// `GET /notes`. An empty collection is answered with 400, not `[]`.
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ServerError> {
    let notes = state.store.all_notes()?;
    if notes.is_empty() {
        return Err(ServerError::NoContent);
    }

    // one lookup per distinct owner
    let mut usernames: HashMap<String, Option<String>> = HashMap::new();
    let mut listed = Vec::with_capacity(notes.len());
    for note in notes {
        let username = match usernames.get(&note.user_id) {
            Some(username) => username.clone(),
            None => {
                let username = state.store.find_user(&note.user_id)?.map(|u| u.username);
                if username.is_none() {
                    log::warn!("note {} belongs to unknown user {}", note.id, note.user_id);
                }
                usernames.insert(note.user_id.clone(), username.clone());
                username
            }
        };
        listed.push(NoteWithUser { note, username });
    }

    Ok(HttpResponse::Ok().json(listed))
}
