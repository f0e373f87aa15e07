use actix_web::web;
use std::{sync::Arc, time::Duration};

pub mod client;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;

use errors::ServerError;
use store::Store;

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub secret: String,
    pub access_token_ttl: Duration,
}

/// Routes for the notes and auth resources.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ServerError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(handlers::index))
    .service(
        web::resource("/notes")
            .route(web::get().to(handlers::note::query::list))
            .route(web::post().to(handlers::note::mutate::new))
            .route(web::patch().to(handlers::note::mutate::update))
            .route(web::delete().to(handlers::note::mutate::del)),
    )
    .service(web::resource("/auth").route(web::post().to(handlers::auth::login)));
}
