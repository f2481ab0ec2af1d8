//! Application configuration loaded from environment variables.

use std::env;

use posts_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let database = get("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: get("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_connections: get("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
            });

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
        }
    }
}
