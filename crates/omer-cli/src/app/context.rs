//! Application context for the Omer CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and builds the
//! query service every command runs against.

use std::path::PathBuf;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;
use tracing::debug;

use omer_core::{Clock, FixedClock, IcuHebrewCalendar, OmerConfig, QueryService, SystemClock};

use crate::cli::Cli;
use crate::config::{read_config, OmerFileConfig};
use crate::ui::UiContext;

use super::resolver::{missing_config_error, resolve_config_path};

/// The service type used by every command.
pub type Service = QueryService<IcuHebrewCalendar, FixedClock>;

/// Application context that bundles CLI args with the config file.
pub struct AppContext<'a> {
    cli: &'a Cli,
    file_config: OnceCell<OmerFileConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            file_config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Terminal context from the global output flags.
    pub fn ui_context(&self) -> UiContext {
        UiContext::from_env(self.cli.json, self.cli.plain, self.cli.no_color, self.cli.ascii)
    }

    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli)
    }

    /// The config file, loaded once. A missing default file yields defaults;
    /// a missing file named by `--config` is an error.
    pub fn file_config(&self) -> anyhow::Result<&OmerFileConfig> {
        self.file_config.get_or_try_init(|| {
            let path = self.config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                return read_config(&path);
            }
            if self.cli.config.is_some() {
                return Err(missing_config_error(&path).into());
            }
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(OmerFileConfig::default())
        })
    }

    /// Effective display settings: flag or env, then file, then defaults.
    pub fn settings(&self) -> anyhow::Result<OmerConfig> {
        let mut settings = self.file_config()?.to_omer_config();
        if let Some(tradition) = self.cli.tradition {
            settings.tradition = tradition;
        }
        if let Some(format) = self.cli.format {
            settings.output_format = format;
        }
        if let Some(dates) = self.cli.dates {
            settings.date_display = dates;
        }
        if self.cli.english {
            settings.include_english = true;
        }
        Ok(settings)
    }

    /// Query service whose "today" is `date`, or the system date.
    pub fn service(&self, date: Option<NaiveDate>) -> Service {
        let today = date.unwrap_or_else(|| SystemClock.today());
        QueryService::with_parts(IcuHebrewCalendar::new(), FixedClock(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use omer_core::{DateDisplay, OutputFormat, Tradition};

    fn cli_with_config(path: &std::path::Path, extra: &[&str]) -> Cli {
        let mut args = vec!["omer", "--config", path.to_str().unwrap()];
        args.extend_from_slice(extra);
        args.push("status");
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_file_values_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let toml = "[liturgy]\ntradition = \"sefardi\"\n[output]\nformat = \"english\"\n";
        std::fs::write(&path, toml).unwrap();
        let cli = cli_with_config(&path, &[]);
        let ctx = AppContext::new(&cli);
        let settings = ctx.settings().unwrap();
        assert_eq!(settings.tradition, Tradition::Sefardi);
        assert_eq!(settings.output_format, OutputFormat::English);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let toml = "[liturgy]\ntradition = \"sefardi\"\n[output]\ndate_display = \"both\"\n";
        std::fs::write(&path, toml).unwrap();
        let cli = cli_with_config(&path, &["-t", "chassidic", "--dates", "iso", "--english"]);
        let ctx = AppContext::new(&cli);
        let settings = ctx.settings().unwrap();
        assert_eq!(settings.tradition, Tradition::Chassidic);
        assert_eq!(settings.date_display, DateDisplay::Iso);
        assert!(settings.include_english);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = cli_with_config(&path, &[]);
        let ctx = AppContext::new(&cli);
        let err = ctx.settings().unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_service_uses_given_date() {
        let cli = Cli::try_parse_from(["omer", "status"]).unwrap();
        let ctx = AppContext::new(&cli);
        let date = NaiveDate::from_ymd_opt(2024, 5, 26).unwrap();
        assert_eq!(ctx.service(Some(date)).today(), date);
    }
}
