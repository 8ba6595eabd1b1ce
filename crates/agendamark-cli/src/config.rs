//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/agendamark/config.toml` by default. Command-line flags
//! override what the file says.

use std::path::{Path, PathBuf};

use agendamark_core::{FormatOptions, TracingConfig, TracingOutputFormat};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for the agendamark CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Log record format on stderr.
    pub log_format: TracingOutputFormat,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display settings for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Render the expanded multi-line form.
    pub details: bool,

    /// Viewer timezone (IANA name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Prefix time phrases with the weekday when rendering time only.
    pub include_day_of_week: bool,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agendamark")
    }

    /// Builds the logging setup, letting flag values win over the file.
    pub fn tracing_config(
        &self,
        debug: bool,
        log_format: Option<TracingOutputFormat>,
    ) -> TracingConfig {
        let base = if debug || self.debug {
            TracingConfig::cli_debug()
        } else {
            TracingConfig::default()
        };
        base.with_format(log_format.unwrap_or(self.log_format))
    }

    /// Builds render options, letting flag values win over the file.
    pub fn format_options(
        &self,
        details: bool,
        timezone: Option<&str>,
        today: Option<NaiveDate>,
    ) -> FormatOptions {
        FormatOptions {
            details: details || self.display.details,
            timezone: timezone
                .map(str::to_string)
                .or_else(|| self.display.timezone.clone()),
            today,
        }
    }
}
