//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `itemapi.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use axum::http::HeaderValue;
use itemapi_adapter_http_axum::cors::DEFAULT_ALLOWED_ORIGINS;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cross-origin settings.
    pub cors: CorsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// CORS configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from `itemapi.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("itemapi.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ITEMAPI_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("ITEMAPI_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = var("ITEMAPI_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("ITEMAPI_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("ITEMAPI_CORS_ORIGINS") {
            self.cors.allowed_origins = val
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.allowed_origins()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the configured origins as header values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if an origin is the `*` wildcard,
    /// or contains characters not allowed in an HTTP header.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors
            .allowed_origins
            .iter()
            .map(|origin| {
                if origin == "*" {
                    return Err(ConfigError::Validation(
                        "wildcard CORS origin is not allowed with credentials, list origins explicitly"
                            .to_string(),
                    ));
                }
                HeaderValue::from_str(origin).map_err(|_| {
                    ConfigError::Validation(format!("invalid CORS origin {origin:?}"))
                })
            })
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "itemapid=info,itemapi=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '0.0.0.0'
            port = 9090

            [logging]
            filter = 'debug'

            [cors]
            allowed_origins = ['https://app.example']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.cors.allowed_origins, vec!["https://app.example"]);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_apply_host_and_port_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("ITEMAPI_HOST", "0.0.0.0"),
            ("ITEMAPI_PORT", "9000"),
        ]));
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn should_let_bind_override_host_and_port() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("ITEMAPI_PORT", "9000"),
            ("ITEMAPI_BIND", "10.0.0.1:7000"),
        ]));
        assert_eq!(config.bind_addr(), "10.0.0.1:7000");
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("ITEMAPI_PORT", "not-a-port")]));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_prefer_rust_log_over_itemapi_log() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("ITEMAPI_LOG", "warn"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_split_cors_origins_override() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[(
            "ITEMAPI_CORS_ORIGINS",
            "https://a.example, https://b.example,,",
        )]));
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_origin_with_control_characters() {
        let mut config = Config::default();
        config.cors.allowed_origins = vec!["http://bad\norigin".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_wildcard_origin() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("ITEMAPI_CORS_ORIGINS", "*")]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("wildcard")
        ));

        let config: Config = toml::from_str("[cors]\nallowed_origins = ['*']").unwrap();
        assert!(config.allowed_origins().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.allowed_origins().unwrap().len(), 2);
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }
}
