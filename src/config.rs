//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_AZURE_CERT_BASE_URL, DEFAULT_GUACAMOLE_URL, DEFAULT_JWT_EXPIRY_HOURS,
    DEFAULT_MAX_UPLOAD_MB, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_STORAGE_PATH,
    DEFAULT_STORAGE_PUBLIC_URL,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
    pub azure: AzureConfig,
    pub guacamole: GuacamoleConfig,
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit logs as JSON lines instead of human readable text
    pub log_json: bool,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// File storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory uploaded files are written to
    pub root_path: PathBuf,
    /// URL prefix stored files are served under
    pub public_url: String,
    /// Request body limit for upload endpoints
    pub max_upload_bytes: usize,
}

/// Azure certificate configuration
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub cert_base_url: String,
}

/// Remote desktop gateway configuration
#[derive(Debug, Clone)]
pub struct GuacamoleConfig {
    pub url: String,
}

/// Platform-wide administrators
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    /// Users holding admin privilege on every hackathon
    pub super_admin_ids: HashSet<i64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            azure: AzureConfig::from_env()?,
            guacamole: GuacamoleConfig::from_env()?,
            admin: AdminConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_json: parse_log_format(&env::var("LOG_FORMAT").unwrap_or_default())?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_upload_mb: usize = env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_MB.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MAX_UPLOAD_MB".to_string()))?;

        Ok(Self {
            root_path: PathBuf::from(
                env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string()),
            ),
            public_url: env::var("STORAGE_PUBLIC_URL")
                .unwrap_or_else(|_| DEFAULT_STORAGE_PUBLIC_URL.to_string()),
            max_upload_bytes: mb_to_bytes(max_upload_mb)
                .ok_or_else(|| ConfigError::InvalidValue("MAX_UPLOAD_MB".to_string()))?,
        })
    }
}

impl AzureConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cert_base_url: env::var("AZURE_CERT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AZURE_CERT_BASE_URL.to_string()),
        })
    }
}

impl GuacamoleConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("GUACAMOLE_URL").unwrap_or_else(|_| DEFAULT_GUACAMOLE_URL.to_string()),
        })
    }
}

impl AdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("SUPER_ADMIN_IDS").unwrap_or_default();
        Ok(Self {
            super_admin_ids: parse_id_list(&raw)
                .map_err(|_| ConfigError::InvalidValue("SUPER_ADMIN_IDS".to_string()))?,
        })
    }
}

/// `json` selects JSON logs; empty or `text` keeps the default format
fn parse_log_format(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(false),
        "json" => Ok(true),
        _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
    }
}

/// Megabytes to bytes, `None` on overflow
fn mb_to_bytes(mb: usize) -> Option<usize> {
    mb.checked_mul(1024)?.checked_mul(1024)
}

/// Parse a comma separated list of user ids, ignoring blanks
fn parse_id_list(raw: &str) -> Result<HashSet<i64>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
