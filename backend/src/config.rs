use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("static directory {0} does not contain index.html, build the frontend first")]
    MissingIndex(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Environment::Staging => 3100,
            _ => 3000,
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory holding the trunk build of the frontend.
    pub static_dir: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let environment = match read("ENVIRONMENT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "ENVIRONMENT", value })?,
            None => Environment::Development,
        };
        let port = match read("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => environment.default_port(),
        };
        let bind_addr = match read("BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let static_dir = read("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("../frontend/dist"));

        Ok(Self {
            environment,
            bind_addr,
            port,
            static_dir,
            sentry_dsn: read("SENTRY_DSN"),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn validate_static_dir(&self) -> Result<(), ConfigError> {
        if self.index_file().is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingIndex(self.static_dir.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_to_development_on_port_3000() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn staging_moves_to_port_3100_unless_overridden() {
        let staging = config_from(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(staging.port, 3100);

        let pinned = config_from(&[("ENVIRONMENT", "staging"), ("PORT", "8080")]).unwrap();
        assert_eq!(pinned.port, 8080);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("ENVIRONMENT", "qa")]),
            Err(ConfigError::Invalid { var: "ENVIRONMENT", .. })
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::Invalid { var: "BIND_ADDR", .. })
        ));
    }

    #[test]
    fn static_dir_must_hold_an_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_from(&[("STATIC_DIR", dir.path().to_str().unwrap())]).unwrap();
        assert!(matches!(
            config.validate_static_dir(),
            Err(ConfigError::MissingIndex(_))
        ));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate_static_dir().is_ok());
    }
}
