//! Application configuration management.
//!
//! Configuration is resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. Environment variables (a `.env` file in the working directory is loaded first)
//! 3. Command-line flags
//!
//! # Environment Variables
//!
//! - `LEXITREE_INPUT`: Document to read (default: `war_and_peace.txt`)
//! - `LEXITREE_OUTPUT`: File to write the sorted words to (default: `output.txt`)
//! - `LEXITREE_LOG`: Log filter used when `RUST_LOG` is unset (default: `info`)

use std::env::{self, VarError};
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the input document.
pub const INPUT_KEY: &str = "LEXITREE_INPUT";
/// Environment variable naming the output file.
pub const OUTPUT_KEY: &str = "LEXITREE_OUTPUT";
/// Environment variable holding the default log filter.
pub const LOG_KEY: &str = "LEXITREE_LOG";

const DEFAULT_INPUT: &str = "war_and_peace.txt";
const DEFAULT_OUTPUT: &str = "output.txt";
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// An environment variable is set but is not valid Unicode.
    #[error("Value of {key} is not valid Unicode")]
    NotUnicode {
        /// The name of the environment variable.
        key: String,
    },
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Document to read.
    pub input: PathBuf,
    /// File the sorted vocabulary is written to.
    pub output: PathBuf,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Whether to report tree shape statistics after the run.
    pub stats: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            stats: false,
        }
    }
}

/// Values given on the command line. `None` keeps the lower layer's value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Input document.
    pub input: Option<PathBuf>,
    /// Output file.
    pub output: Option<PathBuf>,
    /// Log filter.
    pub log_filter: Option<String>,
    /// Report statistics.
    pub stats: bool,
}

impl AppConfig {
    /// Loads configuration from the environment on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to an empty
    /// string, and `ConfigError::NotUnicode` if it is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let defaults = Self::default();

        let input = get_optional(&lookup, INPUT_KEY)?.map_or(defaults.input, PathBuf::from);
        let output = get_optional(&lookup, OUTPUT_KEY)?.map_or(defaults.output, PathBuf::from);
        let log_filter = get_optional(&lookup, LOG_KEY)?.unwrap_or(defaults.log_filter);

        Ok(Self {
            input,
            output,
            log_filter,
            stats: defaults.stats,
        })
    }

    /// Applies command-line values on top of this configuration.
    #[must_use]
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            input: overrides.input.unwrap_or(self.input),
            output: overrides.output.unwrap_or(self.output),
            log_filter: overrides.log_filter.unwrap_or(self.log_filter),
            stats: self.stats || overrides.stats,
        }
    }
}

/// Gets an optional variable, rejecting empty and non-Unicode values.
fn get_optional<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must not be empty".to_string(),
        }),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
        }),
    }
}
