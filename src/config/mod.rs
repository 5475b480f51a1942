use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Settings for the report endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Scheme and host the navigation links are built against
    pub base_url: String,
    /// Page size used when a request carries no usable limit
    pub default_limit: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            default_limit: 10,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(ReportConfig {
            base_url: env::var("REPORT_BASE_URL").unwrap_or(defaults.base_url),
            default_limit: match env::var("REPORT_DEFAULT_LIMIT") {
                Ok(raw) => raw.parse().map_err(|_| {
                    AppError::Configuration("Invalid REPORT_DEFAULT_LIMIT".to_string())
                })?,
                Err(_) => defaults.default_limit,
            },
        })
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            report: ReportConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.report.default_limit == 0 {
            return Err(AppError::Configuration(
                "Report default limit must be greater than 0".to_string(),
            ));
        }

        url::Url::parse(&self.report.base_url).map_err(|e| {
            AppError::Configuration(format!(
                "Invalid REPORT_BASE_URL '{}': {}",
                self.report.base_url, e
            ))
        })?;

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(())
    }
}
