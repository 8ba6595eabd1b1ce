//! Configuration commands.

use chrono_tz::Tz;

use crate::config::ClientConfig;
use crate::error::{CliError, CliResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", ClientConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> CliResult<()> {
    check(config)?;
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> CliResult<()> {
    let config_path = ClientConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}

fn check(config: &ClientConfig) -> CliResult<()> {
    if let Some(ref name) = config.display.timezone {
        name.parse::<Tz>().map_err(|e| {
            CliError::Config(format!("display.timezone {:?} is not an IANA zone: {}", name, e))
        })?;
    }
    Ok(())
}
