use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Invalid LOG_FORMAT: {}", other)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(&|key: &str| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_source(source: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Config {
            app: AppConfig {
                env: source("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: source("LOG_LEVEL").unwrap_or_else(|| "debug".to_string()),
                log_format: parse_or(source, "LOG_FORMAT", LogFormat::Text)?,
            },
            database: DatabaseConfig::from_source(source)?,
            server: ServerConfig::from_source(source)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.database.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

/// Parse `key` from `source`, falling back to `default` when unset
pub(crate) fn parse_or<T: FromStr>(
    source: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match source(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
    }
}
