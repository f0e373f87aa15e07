use actix_web::{web, HttpResponse};
use serde_derive::Deserialize;
use serde_json::json;

use crate::{
    credentials::{issue_access_token, verify_password},
    errors::ServerError,
    models::note::present,
    AppState,
};

#[derive(Deserialize)]
pub struct LoginReq {
    username: Option<String>,
    password: Option<String>,
}

/// `POST /auth`. Unknown users, inactive users and bad passwords all get
/// the same 401.
pub async fn login(
    input: web::Json<LoginReq>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let input = input.into_inner();
    let (username, password) = match (present(input.username), present(input.password)) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(ServerError::MissingFields("All fields are required")),
    };

    let user = state
        .store
        .find_user_by_username(&username)?
        .filter(|user| user.active)
        .ok_or(ServerError::Unauthorized)?;

    if !verify_password(&password, &user.password)? {
        log::info!("rejected login for {}", user.username);
        return Err(ServerError::Unauthorized);
    }

    let token = issue_access_token(&user.username, &state.secret, state.access_token_ttl)?;
    Ok(HttpResponse::Ok().json(json!({ "accessToken": token })))
}
