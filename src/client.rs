//! Client side of the notes service: a transport, a tag-invalidated cache
//! of the notes list and the login / new-note form models built on top.

pub mod api;
pub mod cache;
pub mod entity;
pub mod error;
pub mod forms;
pub mod state;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiClient, NoteView};
pub use error::{ApiError, ErrorKind};
pub use state::ClientState;
pub use transport::{HttpTransport, Transport};
