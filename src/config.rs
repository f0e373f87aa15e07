use std::{env, str::FromStr, time::Duration};

use crate::errors::ServerError;

const DEFAULT_PORT: u16 = 3500;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 900;
const DEFAULT_RATE_LIMIT_REPLENISH_SECS: u64 = 1;
const DEFAULT_RATE_LIMIT_BURST: u32 = 120;

/// Server settings read from the environment (and `.env`, see `main`).
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub secret: String,
    pub access_token_ttl: Duration,
    /// Seconds it takes the limiter to hand back one request slot.
    pub rate_limit_replenish_secs: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Config, ServerError> {
        Ok(Config {
            port: parse_or("PORT", DEFAULT_PORT)?,
            database_url: env::var("DATABASE_URL")?,
            secret: env::var("SECRET_KEY")?,
            access_token_ttl: Duration::from_secs(parse_or(
                "ACCESS_TOKEN_TTL_SECS",
                DEFAULT_ACCESS_TOKEN_TTL_SECS,
            )?),
            rate_limit_replenish_secs: parse_or(
                "RATE_LIMIT_REPLENISH_SECS",
                DEFAULT_RATE_LIMIT_REPLENISH_SECS,
            )?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T, ServerError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            log::error!("{key} has an invalid value: {raw:?}");
            ServerError::EnvironmentError
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}
