//! # Configuration
//!
//! Startup configuration read from the process environment: the store
//! URI, the bind host, and the listening port. `.env` files are loaded by
//! the entry point before this module runs.

pub mod errors;

use std::path::PathBuf;
use std::str::FromStr;

pub use errors::ConfigError;

/// Default listening port if `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind host if `HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Which store backend to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUri {
    /// Volatile in-memory store (`mem:`)
    Memory,
    /// JSON-file store at the given path (`file:<path>` or a bare path)
    File(PathBuf),
}

impl FromStr for StoreUri {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ConfigError::invalid("STORE_URI", s)),
            "mem:" | "mem" | "memory" => Ok(StoreUri::Memory),
            other => {
                let path = other.strip_prefix("file:").unwrap_or(other);
                if path.is_empty() {
                    return Err(ConfigError::invalid("STORE_URI", s));
                }
                Ok(StoreUri::File(PathBuf::from(path)))
            }
        }
    }
}

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_uri: StoreUri,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_uri: StoreUri::Memory,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset or empty variables fall back to defaults; present but
    /// malformed values are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(uri) = lookup("STORE_URI").filter(|v| !v.trim().is_empty()) {
            config.store_uri = uri.parse()?;
        }
        if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|v| !v.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", port))?;
        }

        Ok(config)
    }

    /// The socket address string to bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_lookup(env(&[
            ("STORE_URI", "file:/var/lib/fitlog/store.json"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(
            config.store_uri,
            StoreUri::File(PathBuf::from("/var/lib/fitlog/store.json"))
        );
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bad_port_rejected() {
        let result = AppConfig::from_lookup(env(&[("PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_store_uri_forms() {
        assert_eq!("mem:".parse::<StoreUri>().unwrap(), StoreUri::Memory);
        assert_eq!("memory".parse::<StoreUri>().unwrap(), StoreUri::Memory);
        assert_eq!(
            "file:data/store.json".parse::<StoreUri>().unwrap(),
            StoreUri::File(PathBuf::from("data/store.json"))
        );
        assert_eq!(
            "data/store.json".parse::<StoreUri>().unwrap(),
            StoreUri::File(PathBuf::from("data/store.json"))
        );
        assert!("".parse::<StoreUri>().is_err());
        assert!("file:".parse::<StoreUri>().is_err());
    }
}
