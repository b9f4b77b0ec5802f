use std::{env, net::SocketAddr};
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the server process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Config {
    /// Reads settings from the environment, after loading a `.env` file if one exists
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_address: SocketAddr = parse(
            "BIND_ADDRESS",
            lookup("BIND_ADDRESS"),
            DEFAULT_BIND_ADDRESS.parse().ok(),
            |value| value.parse().ok(),
        )?;

        let max_connections: u32 = parse(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            Some(DEFAULT_MAX_CONNECTIONS),
            |value| value.parse().ok().filter(|n| *n > 0),
        )?;

        let run_migrations: bool = parse(
            "RUN_MIGRATIONS",
            lookup("RUN_MIGRATIONS"),
            Some(true),
            parse_bool,
        )?;

        Ok(Self {
            database_url,
            bind_address,
            max_connections,
            run_migrations,
        })
    }
}

fn parse<T>(
    key: &'static str,
    value: Option<String>,
    default: Option<T>,
    parser: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => parser(value.trim()).ok_or(ConfigError::Invalid { key, value }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/todo")]).unwrap();

        assert_eq!(
            config,
            Config {
                database_url: "postgres://localhost/todo".to_string(),
                bind_address: "0.0.0.0:3000".parse().unwrap(),
                max_connections: 10,
                run_migrations: true,
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/todo"),
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("RUN_MIGRATIONS", "No"),
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.max_connections, 4);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_missing_database_url() {
        assert_eq!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));
        assert_eq!(
            config_from(&[("DATABASE_URL", "")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("DATABASE_URL", "x"), ("BIND_ADDRESS", "localhost")]),
            Err(ConfigError::Invalid {
                key: "BIND_ADDRESS",
                value: "localhost".to_string(),
            })
        );
        assert!(matches!(
            config_from(&[("DATABASE_URL", "x"), ("DATABASE_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                ..
            })
        ));
        assert!(matches!(
            config_from(&[("DATABASE_URL", "x"), ("RUN_MIGRATIONS", "maybe")]),
            Err(ConfigError::Invalid {
                key: "RUN_MIGRATIONS",
                ..
            })
        ));
    }
}
