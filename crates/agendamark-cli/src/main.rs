//! agendamark CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use agendamark_cli::cli::{Cli, Command, ConfigAction};
use agendamark_cli::commands::render::{self, RenderMode};
use agendamark_cli::config::ClientConfig;
use agendamark_cli::error::{CliError, CliResult};
use agendamark_core::tracing::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.tracing_config(cli.debug, cli.log_format)) {
        eprintln!("warning: {}", e);
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> CliResult<ClientConfig> {
    match cli.config {
        Some(ref path) => ClientConfig::load_from(path).map_err(CliError::Config),
        None => ClientConfig::load().map_err(CliError::Config),
    }
}

fn run(cli: Cli, config: ClientConfig) -> CliResult<()> {
    if let Some(Command::Config { action }) = cli.command {
        return match action {
            ConfigAction::Dump => agendamark_cli::commands::config::dump(&config),
            ConfigAction::Validate => agendamark_cli::commands::config::validate(&config),
            ConfigAction::Path => agendamark_cli::commands::config::path(),
        };
    }

    if let Some(ref name) = cli.timezone {
        if agendamark_core::parse_time_zone(name).is_none() {
            return Err(CliError::InvalidArgument(format!(
                "--tz {:?} is not an IANA zone",
                name
            )));
        }
    }

    let mode = if cli.with_day || (cli.time_only && config.display.include_day_of_week) {
        RenderMode::WithDay
    } else if cli.time_only {
        RenderMode::TimeOnly
    } else {
        RenderMode::Full
    };
    let options = config.format_options(cli.details, cli.timezone.as_deref(), cli.today);

    let input = render::read_input(cli.file.as_deref())?;
    let output = render::render(&input, mode, &options)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
