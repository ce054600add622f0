//! Application configuration management.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Fiscal year cache configuration.
    #[serde(default)]
    pub fiscal_cache: FiscalCacheConfig,
    /// Data source configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Clock configuration.
    #[serde(default)]
    pub clock: ClockConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "hrkit=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Fiscal year cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FiscalCacheConfig {
    /// Maximum number of company snapshots kept.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Optional time-to-live in seconds. Entries never expire when unset.
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

fn default_max_capacity() -> u64 {
    64
}

impl Default for FiscalCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            ttl_secs: None,
        }
    }
}

/// Data source configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Path to a JSON array of fiscal year records.
    #[serde(default)]
    pub fiscal_years_path: Option<PathBuf>,
}

/// Clock configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockConfig {
    /// Pins "today" to a fixed date instead of the system clock.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration, layering an explicit file between the
    /// run-mode files and the environment.
    ///
    /// Sources in increasing priority: `config/default`,
    /// `config/{RUN_MODE}`, `file`, `HRKIT__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing or any source
    /// fails to parse.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("HRKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
