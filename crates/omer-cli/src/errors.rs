//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. Core errors are classified by
//! their [`ErrorKind`]; everything else exits with the general code.

use std::fmt;

use omer_core::{ErrorKind, OmerError};

use super::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file, Omer day)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for a core error.
pub fn omer_exit_code(error: &OmerError) -> i32 {
    match error.kind() {
        ErrorKind::Range | ErrorKind::InvalidHebrewMonth | ErrorKind::InvalidHebrewDay => {
            exit_codes::INVALID_INPUT
        }
        ErrorKind::NotInOmerPeriod => exit_codes::NOT_FOUND,
        ErrorKind::DataIntegrity => exit_codes::INTEGRITY_FAILED,
        ErrorKind::DateConversion => exit_codes::GENERAL,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    if let Some(cli) = error.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    if let Some(omer) = error.downcast_ref::<OmerError>() {
        return omer_exit_code(omer);
    }
    exit_codes::GENERAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use omer_core::RangeSubject;

    #[test]
    fn test_cli_error_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), 3);
        assert_eq!(CliError::invalid_input("x").exit_code(), 4);
        let integrity = OmerError::DataIntegrity { issues: Vec::new() };
        assert_eq!(omer_exit_code(&integrity), 6);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Config file not found", "Hint: run omer config init");
        assert_eq!(
            err.to_string(),
            "Config file not found\nHint: run omer config init"
        );
    }

    #[test]
    fn test_omer_error_codes() {
        let range = OmerError::OutOfRange {
            subject: RangeSubject::Ordinal,
            value: 50,
            min: 1,
            max: 49,
        };
        assert_eq!(omer_exit_code(&range), 4);

        let outside = OmerError::NotInOmerPeriod {
            day: 1,
            month: "Tishrei".to_string(),
        };
        assert_eq!(omer_exit_code(&outside), 3);

        let conversion = OmerError::conversion("2024-01-01", "no calendar");
        assert_eq!(omer_exit_code(&conversion), 1);
    }

    #[test]
    fn test_exit_code_downcasts_through_anyhow() {
        let err = anyhow::Error::new(OmerError::InvalidHebrewMonth {
            month: "Adar".to_string(),
        });
        assert_eq!(exit_code_for(&err), 4);

        let err = anyhow::Error::new(OmerError::DataIntegrity { issues: Vec::new() });
        assert_eq!(exit_code_for(&err), 6);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }
}
