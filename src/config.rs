// src/config.rs

use std::{env, net::SocketAddr};

/// Questions per page on every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without it the server keeps its data in memory.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins; `*` allows any.
    pub allowed_origins: Vec<String>,
    /// Fixes the quiz draw sequence when set.
    pub quiz_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = parse_var("BIND_ADDR", "0.0.0.0:5000")?;

        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let quiz_seed = match env::var("QUIZ_SEED") {
            Ok(raw) => Some(raw.parse().map_err(|_| ConfigError::Invalid {
                name: "QUIZ_SEED",
                value: raw,
            })?),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            rust_log,
            bind_addr,
            allowed_origins,
            quiz_seed,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse().map_err(|_| ConfigError::Invalid { name, value: raw })
}
