//! CLI configuration.
//!
//! Loaded in order, later sources overriding earlier ones:
//! 1. `config/default.toml`
//! 2. `config/{BOOKINGMX_ENV}.toml` (default env: `development`)
//! 3. Environment variables, e.g. `BOOKINGMX_LOGGING__LEVEL=debug` or
//!    `BOOKINGMX_GRAPH__DEFAULT_MAX_DISTANCE=25`
//!
//! An explicit `--config <FILE>` replaces the layered sources with that one
//! TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["full", "compact"];

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub graph: GraphSettings,
}

/// Logging output settings. `-v` flags on the command line take precedence
/// over `level`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `full` or `compact`.
    pub format: String,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "full".to_string(),
            include_location: false,
        }
    }
}

/// Defaults for graph commands.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GraphSettings {
    /// Dataset used when `--dataset` is not given.
    pub dataset_path: Option<PathBuf>,
    /// Bound used by `nearby` when `--max-distance` is not given.
    /// Absent means unbounded.
    pub default_max_distance: Option<f64>,
}

impl Config {
    /// Load layered configuration from files and environment.
    pub fn load() -> CliResult<Self> {
        let env = std::env::var("BOOKINGMX_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("BOOKINGMX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CliResult<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::Config(format!(
                "logging.level must be one of {:?} (got {:?})",
                LOG_LEVELS, self.logging.level
            )));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(CliError::Config(format!(
                "logging.format must be one of {:?} (got {:?})",
                LOG_FORMATS, self.logging.format
            )));
        }

        if let Some(max) = self.graph.default_max_distance {
            if !max.is_finite() || max < 0.0 {
                return Err(CliError::Config(format!(
                    "graph.default_max_distance must be finite and >= 0 (got {})",
                    max
                )));
            }
        }

        Ok(())
    }
}
