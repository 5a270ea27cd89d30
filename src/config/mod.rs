//! Configuration management
//!
//! This module handles loading and parsing configuration for the Blockpress API.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Prefix shared by every environment override
const ENV_PREFIX: &str = "BLOCKPRESS";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload configuration
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// The single origin allowed to call the API from a browser
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origin() -> String {
    "http://localhost:5173".to_string()
}

impl ServerConfig {
    /// Socket address string the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum request body size accepted by the upload endpoint (default: 10MB)
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// URL prefix under which uploaded media is addressed
    #[serde(default = "default_media_url_prefix")]
    pub media_url_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_size: default_max_body_size(),
            media_url_prefix: default_media_url_prefix(),
        }
    }
}

fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

fn default_media_url_prefix() -> String {
    "/media".to_string()
}

impl UploadConfig {
    /// Public URL for a media file
    pub fn media_url(&self, filename: &str) -> String {
        format!("{}/{}", self.media_url_prefix.trim_end_matches('/'), filename)
    }
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist or is empty, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })
    }

    /// Load configuration from file with environment variable overrides,
    /// then validate the result.
    ///
    /// Environment variables follow the pattern:
    /// - BLOCKPRESS_SERVER_HOST
    /// - BLOCKPRESS_SERVER_PORT
    /// - BLOCKPRESS_SERVER_CORS_ORIGIN
    /// - BLOCKPRESS_UPLOAD_MAX_BODY_SIZE
    /// - BLOCKPRESS_UPLOAD_MEDIA_URL_PREFIX
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if HeaderValue::from_str(&self.server.cors_origin).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "server.cors_origin is not a valid origin: {:?}",
                self.server.cors_origin
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Some(host) = env_var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var("SERVER_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {}_SERVER_PORT: {}", ENV_PREFIX, port),
            }
        }
        if let Some(cors_origin) = env_var("SERVER_CORS_ORIGIN") {
            self.server.cors_origin = cors_origin;
        }

        if let Some(size) = env_var("UPLOAD_MAX_BODY_SIZE") {
            match size.parse::<usize>() {
                Ok(size) => self.upload.max_body_size = size,
                Err(_) => {
                    tracing::warn!("Ignoring invalid {}_UPLOAD_MAX_BODY_SIZE: {}", ENV_PREFIX, size)
                }
            }
        }
        if let Some(prefix) = env_var("UPLOAD_MEDIA_URL_PREFIX") {
            self.upload.media_url_prefix = prefix;
        }
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{}_{}", ENV_PREFIX, suffix)).ok()
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
const ALL_ENV_VARS: [&str; 5] = [
    "BLOCKPRESS_SERVER_HOST",
    "BLOCKPRESS_SERVER_PORT",
    "BLOCKPRESS_SERVER_CORS_ORIGIN",
    "BLOCKPRESS_UPLOAD_MAX_BODY_SIZE",
    "BLOCKPRESS_UPLOAD_MEDIA_URL_PREFIX",
];

#[cfg(test)]
fn clear_env() {
    for key in ALL_ENV_VARS {
        std::env::remove_var(key);
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        super::CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn valid_host_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("0.0.0.0".to_string()),
            Just("127.0.0.1".to_string()),
            Just("localhost".to_string()),
            (1u8..=254, 0u8..=255, 0u8..=255, 1u8..=254)
                .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d)),
        ]
    }

    fn env_server_value_strategy() -> impl Strategy<Value = (String, String)> {
        prop_oneof![
            valid_host_strategy().prop_map(|h| ("BLOCKPRESS_SERVER_HOST".to_string(), h)),
            (1u16..=65535).prop_map(|p| ("BLOCKPRESS_SERVER_PORT".to_string(), p.to_string())),
            "[a-z]{3,12}".prop_map(|d| (
                "BLOCKPRESS_SERVER_CORS_ORIGIN".to_string(),
                format!("https://{}.example.com", d)
            )),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        /// Any server setting given through the environment wins over the file.
        #[test]
        fn env_override_wins_over_file((env_key, env_value) in env_server_value_strategy()) {
            let _guard = lock_env();
            clear_env();

            let mut file = NamedTempFile::new().expect("Failed to create temp file");
            write!(
                file,
                "server:\n  host: \"original_host\"\n  port: 1234\n  cors_origin: \"http://original\"\n"
            )
            .expect("Failed to write config");

            std::env::set_var(&env_key, &env_value);
            let config = Config::load_with_env(file.path()).expect("Failed to load config");
            clear_env();

            match env_key.as_str() {
                "BLOCKPRESS_SERVER_HOST" => prop_assert_eq!(config.server.host, env_value),
                "BLOCKPRESS_SERVER_PORT" => {
                    let expected: u16 = env_value.parse().expect("Invalid port");
                    prop_assert_eq!(config.server.port, expected);
                }
                "BLOCKPRESS_SERVER_CORS_ORIGIN" => prop_assert_eq!(config.server.cors_origin, env_value),
                _ => {}
            }
        }
    }
}
