use async_trait::async_trait;
use serde_json::{json, Value};
use std::{cell::RefCell, collections::VecDeque};

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Replays canned responses in order and records what was sent.
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        ScriptedTransport {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("script exhausted".to_owned())))
    }
}

/// A `GET /notes` element as the server renders it.
pub fn listed_note(id: &str, title: &str, completed: bool) -> Value {
    let stamp = json!({ "secs_since_epoch": 1_700_000_000u64, "nanos_since_epoch": 0 });
    json!({
        "_id": id,
        "user": "u1",
        "title": title,
        "text": "hi",
        "completed": completed,
        "createdAt": stamp,
        "updatedAt": stamp,
        "username": "dan",
    })
}
