use actix_web::{web, HttpResponse};
use serde_json::json;

use super::{DUPLICATE_TITLE, NOTE_NOT_FOUND};
use crate::{
    errors::ServerError,
    models::note::{present, ReqNote, ReqNoteId, ReqNoteUpdate},
    AppState,
};

/// `POST /notes`
pub async fn new(
    input: web::Json<ReqNote>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let note = input.into_inner().into_new_note()?;

    if state.store.find_note_by_title(&note.title)?.is_some() {
        return Err(ServerError::Duplicate(DUPLICATE_TITLE));
    }

    let created = state.store.insert_note(note)?;
    log::info!("note {} created for user {}", created.id, created.user_id);

    Ok(HttpResponse::Created().json(json!({
        "message": format!("New note {} created", created.title),
    })))
}

/// `PATCH /notes`. Keeping a note's own title is not a duplicate.
pub async fn update(
    input: web::Json<ReqNoteUpdate>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let (note_id, changes) = input.into_inner().into_changes()?;

    let note = match note_id {
        Some(note_id) => state.store.find_note(&note_id)?,
        None => None,
    }
    .ok_or(ServerError::NotFound(NOTE_NOT_FOUND))?;

    if let Some(duplicate) = state.store.find_note_by_title(&changes.title)? {
        if duplicate.id != note.id {
            return Err(ServerError::Duplicate(DUPLICATE_TITLE));
        }
    }

    // the note can vanish between the lookup and the write
    let updated = state
        .store
        .update_note(&note.id, changes)?
        .ok_or(ServerError::NotFound(NOTE_NOT_FOUND))?;
    log::info!("note {} updated", updated.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} updated", updated.title),
    })))
}

/// `DELETE /notes`
pub async fn del(
    input: web::Json<ReqNoteId>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let note_id =
        present(input.into_inner().id).ok_or(ServerError::MissingFields("Note ID required"))?;

    let removed = state
        .store
        .delete_note(&note_id)?
        .ok_or(ServerError::NotFound(NOTE_NOT_FOUND))?;
    log::info!("note {} deleted", removed.id);

    Ok(HttpResponse::Ok().json(format!(
        "Note {} with ID {} deleted",
        removed.title, removed.id
    )))
}
