#![allow(dead_code)]

use actix_web::{dev::Service, dev::ServiceResponse, http::StatusCode, test, web};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

use technotes::{
    credentials::hash_password,
    models::user::User,
    store::MemoryStore,
    AppState,
};

pub const SECRET: &str = "test-secret";

pub fn user(id: &str, username: &str, password: &str, active: bool) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        password: hash_password(password).unwrap(),
        active,
    }
}

/// `u1`/dan (password `pw`) and the deactivated `u2`/eve.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::with_users(vec![
        user("u1", "dan", "pw", true),
        user("u2", "eve", "pw", false),
    ])
}

pub fn app_state(store: MemoryStore) -> web::Data<AppState> {
    web::Data::new(AppState {
        store: Arc::new(store),
        secret: SECRET.to_owned(),
        access_token_ttl: Duration::from_secs(60),
    })
}

pub async fn send<S, R>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}
