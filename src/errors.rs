use actix_web::{http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ServerError {
    #[display(fmt = "{}", _0)]
    MissingFields(&'static str),
    #[display(fmt = "{}", _0)]
    Duplicate(&'static str),
    #[display(fmt = "{}", _0)]
    NotFound(&'static str),
    #[display(fmt = "No notes found")]
    NoContent,
    #[display(fmt = "Unauthorized")]
    Unauthorized,
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "Library Error: Diesel Error.")]
    DieselError,
    #[display(fmt = "Server Error: Pooling Error.")]
    R2D2Error,
    #[display(fmt = "Server Error: Use of an uninitialized environment variable.")]
    EnvironmentError,
    #[display(fmt = "Library Error: JWT Library Malfunctioned")]
    JWTError,
    #[display(fmt = "Library Error: Password Hashing Failed")]
    HashError,
    #[display(fmt = "Server Error: Store Lock Poisoned")]
    StoreError,
}

impl ServerError {
    /// Machine readable tag sent next to the message, so clients can tell
    /// the different 400 responses apart.
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::MissingFields(_) => "missing_fields",
            ServerError::Duplicate(_) => "duplicate",
            ServerError::NotFound(_) => "not_found",
            ServerError::NoContent => "no_content",
            ServerError::Unauthorized => "unauthorized",
            ServerError::BadRequest(_) => "bad_request",
            _ => "internal",
        }
    }
}

impl From<r2d2::Error> for ServerError {
    fn from(err: r2d2::Error) -> ServerError {
        log::error!("connection pool: {err}");
        ServerError::R2D2Error
    }
}

impl From<std::env::VarError> for ServerError {
    fn from(_: std::env::VarError) -> ServerError {
        ServerError::EnvironmentError
    }
}

impl From<diesel::result::Error> for ServerError {
    fn from(err: diesel::result::Error) -> ServerError {
        log::error!("diesel: {err}");
        ServerError::DieselError
    }
}

impl From<jsonwebtoken::errors::Error> for ServerError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        log::error!("jsonwebtoken: {err}");
        ServerError::JWTError
    }
}

impl From<argon2::password_hash::Error> for ServerError {
    fn from(err: argon2::password_hash::Error) -> Self {
        log::error!("argon2: {err}");
        ServerError::HashError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingFields(_)
            | ServerError::NotFound(_)
            | ServerError::NoContent
            | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Duplicate(_) => StatusCode::CONFLICT,
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::DieselError
            | ServerError::R2D2Error
            | ServerError::EnvironmentError
            | ServerError::JWTError
            | ServerError::HashError
            | ServerError::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string(),
            "code": self.code(),
        }))
    }
}
