use std::time::Duration;

use axum::http::HeaderValue;
use marquee_core::error::CoreError;
use marquee_pipeline::DEFAULT_DEBOUNCE;
use marquee_tmdb::api::DEFAULT_API_URL;

/// HTTP server configuration.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for open connections after a shutdown signal
    /// (default: `10`).
    pub shutdown_timeout_secs: u64,
}

/// Where search metrics are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    /// In-process store; counts are lost on restart.
    Memory,
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tmdb_api_url: String,
    /// TMDB read access token, sent as a bearer credential.
    pub tmdb_access_token: String,
    pub store: StoreBackend,
    /// Quiet period before live search input is resolved.
    pub debounce: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `TMDB_API_KEY`         | required                       |
    /// | `TMDB_API_URL`         | `https://api.themoviedb.org/3` |
    /// | `METRIC_STORE`         | `postgres` (or `memory`)       |
    /// | `DATABASE_URL`         | required for `postgres`        |
    /// | `SEARCH_DEBOUNCE_MS`   | `500`                          |
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `3000`                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `10`                           |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let tmdb_access_token =
            var("TMDB_API_KEY").ok_or_else(|| CoreError::missing_env("TMDB_API_KEY"))?;
        let tmdb_api_url = var("TMDB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());

        let store = match var("METRIC_STORE").as_deref().unwrap_or("postgres") {
            "postgres" => StoreBackend::Postgres {
                database_url: var("DATABASE_URL")
                    .ok_or_else(|| CoreError::missing_env("DATABASE_URL"))?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(CoreError::invalid_env(
                    "METRIC_STORE",
                    other,
                    "store backend (postgres, memory)",
                ))
            }
        };

        let debounce = match var("SEARCH_DEBOUNCE_MS") {
            Some(ms) => Duration::from_millis(parse(&ms, "SEARCH_DEBOUNCE_MS", "u64")?),
            None => DEFAULT_DEBOUNCE,
        };

        let port = match var("PORT") {
            Some(port) => parse(&port, "PORT", "u16")?,
            None => 3000,
        };

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(CoreError::invalid_env("CORS_ORIGINS", origin, "origin"));
            }
        }

        let request_timeout_secs = match var("REQUEST_TIMEOUT_SECS") {
            Some(v) => parse(&v, "REQUEST_TIMEOUT_SECS", "u64")?,
            None => 30,
        };
        let shutdown_timeout_secs = match var("SHUTDOWN_TIMEOUT_SECS") {
            Some(v) => parse(&v, "SHUTDOWN_TIMEOUT_SECS", "u64")?,
            None => 10,
        };

        Ok(Self {
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
                port,
                cors_origins,
                request_timeout_secs,
                shutdown_timeout_secs,
            },
            tmdb_api_url,
            tmdb_access_token,
            store,
            debounce,
        })
    }
}

fn parse<T: std::str::FromStr>(value: &str, name: &str, expected: &str) -> Result<T, CoreError> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::invalid_env(name, value, expected))
}
