// src/config.rs

use sea_orm::ConnectOptions;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_MIN_CONNECTIONS: u32 = 2;
const DB_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    /// Reads the process environment. Call after the `.env` files are loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", &lookup, DEFAULT_PORT)?,
            db_max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                &lookup,
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            db_min_connections: parse_or(
                "DB_MIN_CONNECTIONS",
                &lookup,
                DEFAULT_DB_MIN_CONNECTIONS,
            )?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(DB_TIMEOUT)
            .acquire_timeout(DB_TIMEOUT)
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);
        opt
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Loads `.env.{RUST_ENV}` (default `development`), falling back to `.env`.
/// Variables already present in the environment win.
pub fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn only_database_url_is_required() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/ats")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/ats");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.db_min_connections, 2);
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert_eq!(
            config_from(&[("PORT", "3010")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_eq!(
            config_from(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/ats"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3010"),
            ("DB_MAX_CONNECTIONS", "8"),
            ("DB_MIN_CONNECTIONS", "1"),
        ])
        .unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:3010");
        assert_eq!(config.db_max_connections, 8);
        assert_eq!(config.db_min_connections, 1);
    }

    #[test]
    fn unparsable_number_is_an_error() {
        let err = config_from(&[("DATABASE_URL", "postgres://db/ats"), ("PORT", "eighty")])
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn connect_options_carry_pool_settings() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/ats"),
            ("DB_MAX_CONNECTIONS", "8"),
        ])
        .unwrap();

        let opt = config.connect_options();

        assert_eq!(opt.get_url(), "postgres://db/ats");
        assert_eq!(opt.get_max_connections(), Some(8));
        assert_eq!(opt.get_min_connections(), Some(2));
        assert_eq!(opt.get_connect_timeout(), Some(Duration::from_secs(5)));
    }
}
