use actix_web::http::Method;
use serde_derive::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::{
    cmp::Ordering,
    time::{Instant, SystemTime},
};

use super::{
    cache::Tag,
    entity::{Entity, EntityTable},
    error::{message_of, ApiError},
    state::ClientState,
    transport::{ApiRequest, ApiResponse, Transport},
};

/// A listed note as the client keeps it. `id` is filled from `_id` when
/// the list is normalized.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NoteView {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "_id")]
    pub store_id: String,
    pub user: String,
    pub title: String,
    pub text: String,
    pub completed: bool,
    pub username: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: SystemTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: SystemTime,
}

impl Entity for NoteView {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Open notes first, completed ones after.
fn incomplete_first(a: &NoteView, b: &NoteView) -> Ordering {
    a.completed.cmp(&b.completed)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNoteRequest {
    pub user: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateNoteRequest {
    pub id: String,
    pub user: String,
    pub title: String,
    pub text: String,
    pub completed: bool,
}

pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        ApiClient { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Cached notes list, refetched when missing, evicted, invalidated or
    /// failed.
    pub async fn get_notes(
        &self,
        state: &mut ClientState,
    ) -> Result<EntityTable<NoteView>, ApiError> {
        state.collect_garbage(Instant::now());
        if let Some(table) = state.notes.fresh() {
            return Ok(table.clone());
        }

        let result = self.fetch_notes().await;
        let provides = match &result {
            Ok(table) => std::iter::once(Tag::List)
                .chain(table.ids().iter().cloned().map(Tag::Note))
                .collect(),
            Err(_) => vec![Tag::List],
        };
        state.notes.store(result.clone(), provides, Instant::now());
        result
    }

    async fn fetch_notes(&self) -> Result<EntityTable<NoteView>, ApiError> {
        let response = self.send(Method::GET, "/notes", None).await?;
        if response.status != 200 {
            return Err(ApiError::from_response(&response));
        }

        let mut notes: Vec<NoteView> = serde_json::from_value(response.body)
            .map_err(|_| ApiError::malformed(response.status, "notes"))?;
        for note in &mut notes {
            note.id = note.store_id.clone();
        }
        Ok(EntityTable::set_all(notes, incomplete_first))
    }

    pub async fn add_new_note(
        &self,
        state: &mut ClientState,
        note: &NewNoteRequest,
    ) -> Result<String, ApiError> {
        let body = json!({
            "user": note.user,
            "title": note.title,
            "text": note.text,
        });
        let response = self.mutate(Method::POST, "/notes", body).await?;
        state.notes.invalidate(&[Tag::List]);
        Ok(message_of(&response.body).unwrap_or_default())
    }

    pub async fn update_note(
        &self,
        state: &mut ClientState,
        note: &UpdateNoteRequest,
    ) -> Result<String, ApiError> {
        let body = json!({
            "id": note.id,
            "user": note.user,
            "title": note.title,
            "text": note.text,
            "completed": note.completed,
        });
        let response = self.mutate(Method::PATCH, "/notes", body).await?;
        state.notes.invalidate(&[Tag::Note(note.id.clone())]);
        Ok(message_of(&response.body).unwrap_or_default())
    }

    pub async fn delete_note(&self, state: &mut ClientState, id: &str) -> Result<String, ApiError> {
        let response = self
            .mutate(Method::DELETE, "/notes", json!({ "id": id }))
            .await?;
        state.notes.invalidate(&[Tag::Note(id.to_owned())]);
        Ok(message_of(&response.body).unwrap_or_default())
    }

    /// Exchanges credentials for an access token and keeps it in `state`.
    pub async fn login(
        &self,
        state: &mut ClientState,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let body = json!({ "username": username, "password": password });
        let response = self.mutate(Method::POST, "/auth", body).await?;
        let token = response
            .body
            .get("accessToken")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::malformed(response.status, "login"))?
            .to_owned();
        state.auth.set_credentials(token.clone());
        Ok(token)
    }

    async fn mutate(
        &self,
        method: Method,
        path: &'static str,
        body: Value,
    ) -> Result<ApiResponse, ApiError> {
        let response = self.send(method, path, Some(body)).await?;
        if !(200..300).contains(&response.status) {
            return Err(ApiError::from_response(&response));
        }
        Ok(response)
    }

    async fn send(
        &self,
        method: Method,
        path: &'static str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        Ok(self
            .transport
            .send(ApiRequest { method, path, body })
            .await?)
    }
}
