//! Configuration loaded from the environment.
//!
//! `.env` files are honoured through `dotenvy` in the binary; this module only
//! reads variables. Command line flags override whatever is loaded here.

use std::str::FromStr;

use crate::error::ConfigError;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with score bars.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format '{}', expected 'text' or 'json'", s)),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid log format '{}', expected 'pretty' or 'json'", s)),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text inputs longer than this many bytes are rejected.
    pub max_text_bytes: usize,
    pub output: OutputFormat,
    /// Include `_`-prefixed metadata entries in the text report.
    pub show_metadata: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_bytes: 100_000,
            output: OutputFormat::Text,
            show_metadata: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            max_text_bytes: parse_var(&lookup, "SYNTHSCORE_MAX_TEXT_BYTES")?
                .unwrap_or(defaults.max_text_bytes),
            output: parse_var(&lookup, "SYNTHSCORE_OUTPUT")?.unwrap_or(defaults.output),
            show_metadata: parse_bool(&lookup, "SYNTHSCORE_SHOW_METADATA")?
                .unwrap_or(defaults.show_metadata),
            log_format: parse_var(&lookup, "SYNTHSCORE_LOG_FORMAT")?
                .unwrap_or(defaults.log_format),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
    }
}

fn parse_bool<F>(lookup: &F, key: &str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_lowercase()) {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("'{}' is not a boolean", v),
            }),
        },
    }
}
