//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Upper bound on token lifetime; keeps expiry arithmetic far from overflow
const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 3600;

/// Where the active configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Requests running longer than this are aborted
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

impl AuthConfig {
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == default_jwt_secret()
    }
}

/// CORS configuration for the browser client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_db_path() -> String {
    "./data/notes.db".to_string()
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}

fn default_token_ttl_secs() -> i64 {
    3600
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    ///
    /// Values are not validated here; call [`Config::validate`] once all
    /// overrides have been applied.
    pub fn load(path: &str) -> Result<(Self, ConfigSource)> {
        let config_path = Path::new(path);

        if !config_path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok((config, ConfigSource::File))
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            anyhow::bail!("auth.jwt_secret must not be empty");
        }
        if self.auth.token_ttl_secs <= 0 {
            anyhow::bail!("auth.token_ttl_secs must be positive");
        }
        if self.auth.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            anyhow::bail!(
                "auth.token_ttl_secs must not exceed {} (one year)",
                MAX_TOKEN_TTL_SECS
            );
        }
        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("server.request_timeout_secs must be positive");
        }
        Ok(())
    }

    /// Log warnings for settings that are unsafe outside development
    pub fn warn_insecure_defaults(&self) {
        if self.auth.uses_default_secret() {
            warn!("Using the default JWT secret; set auth.jwt_secret or JWT_SECRET in production");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.token_ttl_secs, 3600);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(config.auth.uses_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [auth]
            jwt_secret = "s3cret"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.token_ttl_secs, 3600);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert!(!config.auth.uses_default_secret());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let (config, source) = Config::load("/nonexistent/notes-config.toml").unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.database.path, "./data/notes.db");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080\n[database]\npath = \"/tmp/n.db\"").unwrap();

        let (config, source) = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "/tmp/n.db");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        config.auth.token_ttl_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.auth.jwt_secret.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_ttl_is_capped_at_one_year() {
        let mut config = Config::default();
        config.auth.token_ttl_secs = MAX_TOKEN_TTL_SECS;
        assert!(config.validate().is_ok());

        config.auth.token_ttl_secs = MAX_TOKEN_TTL_SECS + 1;
        assert!(config.validate().is_err());

        config.auth.token_ttl_secs = i64::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_does_not_validate_before_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[auth]\njwt_secret = \"\"").unwrap();

        // An empty secret in the file can still be supplied by JWT_SECRET
        let (mut config, _) = Config::load(file.path().to_str().unwrap()).unwrap();
        assert!(config.validate().is_err());
        config.auth.jwt_secret = "from-env".to_string();
        assert!(config.validate().is_ok());
    }
}
