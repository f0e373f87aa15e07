use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use technotes::{
    config::Config,
    store::{pg, PgStore},
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("env DATABASE_URL, SECRET_KEY and friends");
    let pool = pg::build_pool(&config.database_url).expect("failed to create a pg pool");
    let state = web::Data::new(AppState {
        store: Arc::new(PgStore::new(pool)),
        secret: config.secret.clone(),
        access_token_ttl: config.access_token_ttl,
    });

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_replenish_secs)
        .burst_size(config.rate_limit_burst)
        .finish()
        .expect("RATE_LIMIT_REPLENISH_SECS and RATE_LIMIT_BURST must be positive");

    log::info!("listening on 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Governor::new(&governor_conf))
            .wrap(Logger::default())
            .configure(technotes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
