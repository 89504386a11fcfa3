use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set when GAMES_STORE=postgres")]
    MissingDatabaseUrl,
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub http_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("GAMES_STORE").as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "GAMES_STORE",
                    value: other.to_string(),
                });
            }
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value,
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = http_addr
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "HTTP_ADDR",
                value: http_addr.clone(),
            })?;

        Ok(Config {
            store,
            database_url,
            max_connections,
            http_addr,
        })
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
    fn postgres_is_default_and_needs_url() {
        assert!(matches!(config_from(&[]), Err(ConfigError::MissingDatabaseUrl)));

        let config = config_from(&[("DATABASE_URL", "postgres://localhost/games")]).unwrap();
        assert_eq!(config.store, StoreKind::Postgres);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.http_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn memory_store_needs_no_database() {
        let config = config_from(&[("GAMES_STORE", "memory"), ("HTTP_ADDR", "127.0.0.1:3000")])
            .unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.database_url, None);
        assert_eq!(config.http_addr.port(), 3000);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("GAMES_STORE", "mongo")]),
            Err(ConfigError::Invalid { key: "GAMES_STORE", .. })
        ));
        assert!(matches!(
            config_from(&[("GAMES_STORE", "memory"), ("DATABASE_MAX_CONNECTIONS", "lots")]),
            Err(ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("GAMES_STORE", "memory"), ("HTTP_ADDR", "nowhere")]),
            Err(ConfigError::Invalid { key: "HTTP_ADDR", .. })
        ));
    }
}
