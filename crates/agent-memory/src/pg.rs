//! Postgres connection parameter resolution.

use std::env;

/// Connection parameters for the external store.
///
/// Recomputed on every call; each field defaults independently when its
/// environment variable is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgConfig {
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
}

impl PgConfig {
    /// Resolve from `PGHOST`/`PGPORT`/`PGDATABASE`/`PGUSER`.
    pub fn from_env() -> Self {
        Self::resolve(|key| env::var(key).ok())
    }

    fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: get("PGHOST").unwrap_or_else(|| "localhost".to_string()),
            port: get("PGPORT").unwrap_or_else(|| "5432".to_string()),
            database: get("PGDATABASE").unwrap_or_else(|| "agent_memory".to_string()),
            user: get("PGUSER").unwrap_or_else(|| {
                get("USER")
                    .or_else(|| get("USERNAME"))
                    .unwrap_or_else(|| "postgres".to_string())
            }),
        }
    }

    /// psql argv targeting this configuration, running one statement
    /// without a password prompt and stopping on the first error.
    pub fn psql_args(&self, statement: &str) -> Vec<String> {
        vec![
            "-w".to_string(),
            "-h".to_string(),
            self.host.clone(),
            "-p".to_string(),
            self.port.clone(),
            "-U".to_string(),
            self.user.clone(),
            "-d".to_string(),
            self.database.clone(),
            "-v".to_string(),
            "ON_ERROR_STOP=1".to_string(),
            "-c".to_string(),
            statement.to_string(),
        ]
    }
}
