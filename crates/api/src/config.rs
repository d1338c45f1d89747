use std::num::NonZeroU32;

use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be {expected} (got '{value}')")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Where todos are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL via a sqlx pool.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local store; contents are lost on restart.
    Memory,
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageBackend,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `postgres`                 |
    /// | `DATABASE_URL`         | required for `postgres`    |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port = parse_var("PORT", var("PORT", "3000"), "a valid port number")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_var(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        let storage = match var("STORAGE_BACKEND", "postgres").as_str() {
            "postgres" => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_var::<NonZeroU32>(
                    "DB_MAX_CONNECTIONS",
                    var("DB_MAX_CONNECTIONS", "20"),
                    "a positive integer",
                )?
                .get(),
            },
            "memory" => StorageBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "STORAGE_BACKEND",
                    expected: "'postgres' or 'memory'",
                    value: other.to_string(),
                })
            }
        };

        let log_format = match var("LOG_FORMAT", "pretty").as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    expected: "'pretty' or 'json'",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            log_format,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
