use diesel::Queryable;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use std::time::SystemTime;

use crate::errors::ServerError;

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

#[derive(Clone, Debug, PartialEq, Queryable, Serialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "user")]
    pub user_id: String,
    pub title: String,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: SystemTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: SystemTime,
}

/// A note as listed to clients, with the owner's username joined in.
#[derive(Clone, Debug, Serialize)]
pub struct NoteWithUser {
    #[serde(flatten)]
    pub note: Note,
    pub username: Option<String>,
}

/// Validated input for a note insert. The store assigns id and timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewNote {
    pub user_id: String,
    pub title: String,
    pub text: String,
}

/// The four fields an update overwrites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteChanges {
    pub user_id: String,
    pub title: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReqNote {
    pub user: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReqNoteUpdate {
    pub id: Option<String>,
    pub user: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    /// Anything but a JSON boolean counts as missing.
    pub completed: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReqNoteId {
    pub id: Option<String>,
}

/// Empty strings count as absent.
pub(crate) fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl ReqNote {
    pub fn into_new_note(self) -> Result<NewNote, ServerError> {
        match (present(self.user), present(self.title), present(self.text)) {
            (Some(user_id), Some(title), Some(text)) => Ok(NewNote {
                user_id,
                title,
                text,
            }),
            _ => Err(ServerError::MissingFields(ALL_FIELDS_REQUIRED)),
        }
    }
}

impl ReqNoteUpdate {
    /// Splits the body into the target id (if any) and the new field values.
    pub fn into_changes(self) -> Result<(Option<String>, NoteChanges), ServerError> {
        match (
            present(self.user),
            present(self.title),
            present(self.text),
            self.completed.as_ref().and_then(Value::as_bool),
        ) {
            (Some(user_id), Some(title), Some(text), Some(completed)) => Ok((
                present(self.id),
                NoteChanges {
                    user_id,
                    title,
                    text,
                    completed,
                },
            )),
            _ => Err(ServerError::MissingFields(ALL_FIELDS_REQUIRED)),
        }
    }
}
