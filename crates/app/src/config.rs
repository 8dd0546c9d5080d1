//! Environment-driven configuration.

use std::str::FromStr;

use stockroom_observability::LogFormat;
use thiserror::Error;

pub const SEED_DEMO_VAR: &str = "STOCKROOM_SEED_DEMO";
pub const SEARCH_VAR: &str = "STOCKROOM_SEARCH";
pub const OUTPUT_VAR: &str = "STOCKROOM_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected true/false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: expected text or json, got {value:?}")]
    InvalidOutput { var: &'static str, value: String },

    #[error("{var}: expected json or pretty, got {value:?}")]
    InvalidLogFormat { var: &'static str, value: String },
}

/// How the catalog is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutput {
                var: OUTPUT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed the demo catalog at startup.
    pub seed_demo: bool,
    /// Search-box text applied to both lists before printing.
    pub search: String,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            search: String::new(),
            output: OutputFormat::Text,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    ///
    /// Bad values fall back to defaults rather than aborting startup. The
    /// problems are returned instead of logged because logging is set up from
    /// this config.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut problems = Vec::new();

        let seed_demo = setting(&lookup, SEED_DEMO_VAR, defaults.seed_demo, &mut problems, |v| {
            parse_bool(SEED_DEMO_VAR, v)
        });
        let output = setting(
            &lookup,
            OUTPUT_VAR,
            defaults.output,
            &mut problems,
            str::parse::<OutputFormat>,
        );
        let log_format = setting(
            &lookup,
            LOG_FORMAT_VAR,
            defaults.log_format,
            &mut problems,
            parse_log_format,
        );

        let config = Self {
            seed_demo,
            search: lookup(SEARCH_VAR).unwrap_or(defaults.search),
            output,
            log_format,
        };
        (config, problems)
    }
}

/// Parsed value of `var`, or `default` (recording why) when it does not parse.
fn setting<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: T,
    problems: &mut Vec<ConfigError>,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> T {
    match lookup(var).map(|v| parse(&v)) {
        None => default,
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            problems.push(e);
            default
        }
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "pretty" | "text" => Ok(LogFormat::Pretty),
        _ => Err(ConfigError::InvalidLogFormat {
            var: LOG_FORMAT_VAR,
            value: value.to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
