use derive_more::Display;
use serde_json::Value;

use super::transport::{ApiResponse, TransportError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response at all.
    Transport,
    /// Missing or malformed fields.
    Validation,
    /// Duplicate title.
    Conflict,
    /// Unknown note id.
    NotFound,
    /// The notes list is empty.
    Empty,
    Unauthorized,
    Other,
}

#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "{}", message)]
pub struct ApiError {
    pub kind: ErrorKind,
    /// `None` when the request never got an answer.
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn from_response(response: &ApiResponse) -> Self {
        let kind = match response.body.get("code").and_then(Value::as_str) {
            Some("missing_fields") | Some("bad_request") => ErrorKind::Validation,
            Some("duplicate") => ErrorKind::Conflict,
            Some("not_found") => ErrorKind::NotFound,
            Some("no_content") => ErrorKind::Empty,
            Some("unauthorized") => ErrorKind::Unauthorized,
            _ => match response.status {
                400 => ErrorKind::Validation,
                401 => ErrorKind::Unauthorized,
                404 => ErrorKind::NotFound,
                409 => ErrorKind::Conflict,
                _ => ErrorKind::Other,
            },
        };

        ApiError {
            kind,
            status: Some(response.status),
            message: message_of(&response.body).unwrap_or_default(),
        }
    }

    pub(crate) fn malformed(status: u16, what: &str) -> Self {
        ApiError {
            kind: ErrorKind::Other,
            status: Some(status),
            message: format!("malformed {what} payload"),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError {
            kind: ErrorKind::Transport,
            status: None,
            message: err.to_string(),
        }
    }
}

/// `{"message": ...}` or a bare JSON string.
pub(crate) fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.as_str())
        .map(str::to_owned)
}
