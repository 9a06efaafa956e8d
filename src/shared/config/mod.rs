//! Gateway configuration module
//!
//! Configuration is read from the environment (after `.env` has been loaded
//! by the binary) and falls back to local development defaults.
//!
//! | variable       | default                   |
//! |----------------|---------------------------|
//! | `SERVER_HOST`  | `0.0.0.0`                 |
//! | `SERVER_PORT`  | `9070`                    |
//! | `DATABASE_URL` | `sqlite://kdt.db?mode=rwc`|
//! | `JWT_SECRET`   | development secret        |
//! | `UPLOAD_DIR`   | `uploads`                 |

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Port the original deployment listened on
pub const DEFAULT_PORT: u16 = 9070;

/// SQLite file created next to the binary when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://kdt.db?mode=rwc";

/// Directory product images are written to
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

const DEV_JWT_SECRET: &str = "kdt-dev-secret-change-me";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// sqlx connection string
    pub database_url: String,
    /// HMAC secret used to sign access tokens
    pub jwt_secret: String,
    /// Where uploaded product images are stored
    pub upload_dir: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
        }
    }
}

impl GatewayConfig {
    /// Create a new GatewayConfigBuilder
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            let host = host
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host))?;
            builder = builder.host(host);
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?;
            builder = builder.port(port);
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            builder = builder.upload_dir(dir);
        }

        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
            }
        }

        builder.build()
    }

    /// Socket address the server listens on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("UPLOAD_DIR"));
        }
        Ok(())
    }
}

/// Builder for GatewayConfig
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    upload_dir: Option<PathBuf>,
}

impl GatewayConfigBuilder {
    /// Set the bind host
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the image upload directory
    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<GatewayConfig, ConfigError> {
        let defaults = GatewayConfig::default();
        let config = GatewayConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url.unwrap_or(defaults.database_url),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            upload_dir: self.upload_dir.unwrap_or(defaults.upload_dir),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid host: {0}")]
    InvalidHost(String),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["SERVER_HOST", "SERVER_PORT", "DATABASE_URL", "JWT_SECRET", "UPLOAD_DIR"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = GatewayConfig::builder().build().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.upload_dir, PathBuf::from(DEFAULT_UPLOAD_DIR));
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9070");
    }

    #[test]
    fn test_builder_overrides() {
        let config = GatewayConfig::builder()
            .port(8080)
            .database_url("sqlite::memory:")
            .jwt_secret("s3cret")
            .build()
            .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.jwt_secret, "s3cret");
    }

    #[test]
    fn test_builder_rejects_empty_secret() {
        let result = GatewayConfig::builder().jwt_secret("").build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue("JWT_SECRET"));
    }

    #[test]
    fn test_builder_rejects_empty_upload_dir() {
        let result = GatewayConfig::builder().upload_dir("").build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue("UPLOAD_DIR"));
    }

    #[test]
    fn test_builder_rejects_port_zero() {
        let result = GatewayConfig::builder().port(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var("SERVER_PORT", "9999");
        std::env::set_var("DATABASE_URL", "sqlite://test.db");
        std::env::set_var("JWT_SECRET", "from-env");
        std::env::set_var("UPLOAD_DIR", "/var/lib/kdt/images");

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.database_url, "sqlite://test.db");
        assert_eq!(config.jwt_secret, "from-env");
        assert_eq!(config.upload_dir, PathBuf::from("/var/lib/kdt/images"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("SERVER_PORT", "not-a-port");

        let result = GatewayConfig::from_env();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidPort("not-a-port".to_string()));
        clear_env();
    }
}
