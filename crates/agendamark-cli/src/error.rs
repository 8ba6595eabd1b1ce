//! CLI error types.

use std::fmt;

use agendamark_core::EventParseError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// IO error.
    Io(std::io::Error),
    /// Input is not event JSON.
    Parse(EventParseError),
    /// A flag value was rejected.
    InvalidArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Parse(err) => write!(f, "{}", err),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<EventParseError> for CliError {
    fn from(err: EventParseError) -> Self {
        Self::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            CliError::Config("bad".into()).to_string(),
            "configuration error: bad"
        );
        assert_eq!(
            CliError::InvalidArgument("--tz".into()).to_string(),
            "invalid argument: --tz"
        );
    }

    #[test]
    fn parse_error_keeps_source() {
        let err: CliError = agendamark_core::parse_events("42").unwrap_err().into();
        assert!(matches!(err, CliError::Parse(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
