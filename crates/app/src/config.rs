//! Application configuration.

use clap::{Args, Parser, ValueEnum};

use crate::{auth::AuthConfig, store::StoreConfig};

/// Tavola client configuration
#[derive(Debug, Parser)]
#[command(name = "tavola", about = "Tavola delivery client", long_about = None)]
pub struct AppConfig {
    /// Managed data store settings.
    #[command(flatten)]
    pub store: StoreSettings,

    /// Auth gateway settings.
    #[command(flatten)]
    pub auth: AuthSettings,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Managed data store settings.
#[derive(Debug, Args)]
pub struct StoreSettings {
    /// Store base address
    #[arg(long, env = "STORE_URL")]
    pub store_url: String,

    /// Store API key
    #[arg(long, env = "STORE_API_KEY", hide_env_values = true)]
    pub store_api_key: String,
}

impl From<&StoreSettings> for StoreConfig {
    fn from(settings: &StoreSettings) -> Self {
        StoreConfig {
            base_url: settings.store_url.clone(),
            api_key: settings.store_api_key.clone(),
        }
    }
}

/// Auth gateway settings.
#[derive(Debug, Args)]
pub struct AuthSettings {
    /// Auth gateway base address
    #[arg(long, env = "AUTH_URL")]
    pub auth_url: String,

    /// Auth gateway API key
    #[arg(long, env = "AUTH_API_KEY", hide_env_values = true)]
    pub auth_api_key: String,
}

impl From<&AuthSettings> for AuthConfig {
    fn from(settings: &AuthSettings) -> Self {
        AuthConfig {
            base_url: settings.auth_url.clone(),
            api_key: settings.auth_api_key.clone(),
        }
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingSettings {
    /// Default log level filter
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Compact,

    /// Structured JSON output.
    Json,
}
