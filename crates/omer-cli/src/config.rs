use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use omer_core::{DateDisplay, OmerConfig, OutputFormat, Tradition};

/// On-disk configuration, `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OmerFileConfig {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub liturgy: LiturgySection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    pub include_english: bool,
    pub date_display: DateDisplay,
    pub gregorian_format: String,
    pub show_week_info: bool,
    pub show_remaining_days: bool,
    pub compact: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        let defaults = OmerConfig::default();
        Self {
            format: defaults.output_format,
            include_english: defaults.include_english,
            date_display: defaults.date_display,
            gregorian_format: defaults.gregorian_format,
            show_week_info: defaults.show_week_info,
            show_remaining_days: defaults.show_remaining_days,
            compact: defaults.compact_output,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiturgySection {
    pub tradition: Tradition,
}

impl OmerFileConfig {
    /// Display preferences as the core understands them.
    pub fn to_omer_config(&self) -> OmerConfig {
        OmerConfig {
            tradition: self.liturgy.tradition,
            output_format: self.output.format,
            include_english: self.output.include_english,
            date_display: self.output.date_display,
            gregorian_format: self.output.gregorian_format.clone(),
            show_week_info: self.output.show_week_info,
            show_remaining_days: self.output.show_remaining_days,
            compact_output: self.output.compact,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<OmerFileConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &OmerFileConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("omer"));
        }
    }
    Ok(home_dir()?.join(".config").join("omer"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
