//! Logging setup.
//!
//! Everything is written to stderr; stdout only ever carries rendered
//! markdown. `RUST_LOG` replaces the default `agendamark=<level>` directive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt as layers, prelude::*, util::TryInitError};

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Shape of each log record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingOutputFormat {
    /// One terse human-readable line per record.
    #[default]
    Compact,
    /// One JSON object per record, with timestamps.
    Json,
}

impl TracingOutputFormat {
    /// Returns the name used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for TracingOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TracingOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown log format {:?} (expected compact or json)",
                other
            )),
        }
    }
}

/// How logging is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level for agendamark targets when `RUST_LOG` is unset.
    pub level: Level,
    /// Record shape.
    pub output_format: TracingOutputFormat,
    /// Add target, file and line to each record.
    pub verbose: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            output_format: TracingOutputFormat::Compact,
            verbose: false,
        }
    }
}

impl TracingConfig {
    /// Debug-level logging with source locations.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            level: Level::DEBUG,
            verbose: true,
            ..Self::default()
        }
    }

    /// Set the record shape.
    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// The filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> String {
        format!("agendamark={}", self.level)
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails when a global subscriber has already been set.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let layer = match config.output_format {
        TracingOutputFormat::Compact => layers::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
            .with_target(config.verbose)
            .with_file(config.verbose)
            .with_line_number(config.verbose)
            .boxed(),
        TracingOutputFormat::Json => layers::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(config.verbose)
            .with_file(config.verbose)
            .with_line_number(config.verbose)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()?;
    Ok(())
}
