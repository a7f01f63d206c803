//! Showcase configuration.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Parsing is separated from the environment itself so it can be
//! tested with a plain lookup function.

use std::env;
use std::str::FromStr;

use thiserror::Error;

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
}

/// How the showcase renders each stage of the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `key - value` lines under a title.
    #[default]
    Text,
    /// One JSON object per stage.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Showcase configuration.
///
/// # Environment Variables
///
/// - `SHOWCASE_OUTPUT`: `text` or `json` (optional, default: `text`)
/// - `SHOWCASE_PAUSE`: wait for a line on stdin before exiting (optional, default: `false`)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Rendering used for every stage.
    pub output: OutputFormat,
    /// Whether to wait for input before exiting.
    pub pause: bool,
}

impl ShowcaseConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = parse_optional(&lookup, "SHOWCASE_OUTPUT", OutputFormat::default())?;
        let pause = parse_optional(&lookup, "SHOWCASE_PAUSE", false)?;
        Ok(Self { output, pause })
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}
