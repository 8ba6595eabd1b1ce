//! Command-line interface definition.

use std::path::PathBuf;

use agendamark_core::TracingOutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// agendamark - Calendar events as chat markdown
#[derive(Debug, Parser)]
#[command(name = "agendamark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Event JSON to render ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short, env = "AGENDAMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Log record format on stderr (compact or json)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<TracingOutputFormat>,

    // --- Display options ---
    /// Render the expanded multi-line form
    #[arg(long)]
    pub details: bool,

    /// Viewer timezone (IANA name) for events that name none
    #[arg(long = "tz", value_name = "NAME")]
    pub timezone: Option<String>,

    /// Reference date for "Today" and same-day elision
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    // --- Time phrase only ---
    /// Render only the time phrase, prefixed with the weekday
    #[arg(long, group = "phrase")]
    pub with_day: bool,

    /// Render only the time phrase
    #[arg(long, group = "phrase")]
    pub time_only: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Dump,
    /// Show the configuration file path
    Path,
    /// Check the configuration
    Validate,
}
