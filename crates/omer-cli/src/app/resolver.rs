//! Path resolution for the config file.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::default_config_path;
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path: `--config`, then OMER_CONFIG, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.clone() {
        return Ok(path);
    }
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Error for an explicitly requested config file that does not exist.
pub fn missing_config_error(config_path: &Path) -> CliError {
    CliError::not_found(
        format!("Config file not found: {}", config_path.display()),
        format!(
            "Hint: Run `omer config init` or set {} to another location.",
            CONFIG_ENV
        ),
    )
}
