//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (date conversion, I/O).
    pub const GENERAL: i32 = 1;

    /// Not found: the date is not an Omer day, or a config file is missing.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (day/week out of range, bad month or day).
    pub const INVALID_INPUT: i32 = 4;

    /// Static data integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "OMER_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "OMER_LOG";
