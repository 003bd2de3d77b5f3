//! Display preferences.
//!
//! Plain data, deserializable from any serde source. The core never loads
//! it by itself; callers build one and pass it where it is needed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tradition::Tradition;

/// Error returned when a preference value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {what}: {value} (expected one of: {expected})")]
pub struct UnknownVariantError {
    pub what: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Which counting text to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hebrew,
    Transliterated,
    /// Hebrew followed by its transliteration.
    Both,
    English,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hebrew => "hebrew",
            Self::Transliterated => "transliterated",
            Self::Both => "both",
            Self::English => "english",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hebrew" => Ok(Self::Hebrew),
            "transliterated" | "transliteration" => Ok(Self::Transliterated),
            "both" => Ok(Self::Both),
            "english" => Ok(Self::English),
            _ => Err(UnknownVariantError {
                what: "output format",
                value: s.to_string(),
                expected: "hebrew, transliterated, both, english",
            }),
        }
    }
}

/// Which date labels to show alongside a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateDisplay {
    #[default]
    #[serde(alias = "hebrew")]
    HebrewOnly,
    #[serde(alias = "gregorian")]
    GregorianOnly,
    Both,
    Iso,
}

impl DateDisplay {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HebrewOnly => "hebrew_only",
            Self::GregorianOnly => "gregorian_only",
            Self::Both => "both",
            Self::Iso => "iso",
        }
    }

    pub fn shows_gregorian(self) -> bool {
        !matches!(self, Self::HebrewOnly)
    }
}

impl fmt::Display for DateDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateDisplay {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "hebrew" | "hebrew_only" => Ok(Self::HebrewOnly),
            "gregorian" | "gregorian_only" => Ok(Self::GregorianOnly),
            "both" => Ok(Self::Both),
            "iso" => Ok(Self::Iso),
            _ => Err(UnknownVariantError {
                what: "date display",
                value: s.to_string(),
                expected: "hebrew, gregorian, both, iso",
            }),
        }
    }
}

/// Preferences consumed by the text helpers in [`crate::format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmerConfig {
    pub tradition: Tradition,
    pub output_format: OutputFormat,
    /// Append the English translation to non-English formats.
    pub include_english: bool,
    pub date_display: DateDisplay,
    /// strftime pattern for Gregorian dates.
    pub gregorian_format: String,
    pub show_week_info: bool,
    pub show_remaining_days: bool,
    pub compact_output: bool,
}

impl Default for OmerConfig {
    fn default() -> Self {
        Self {
            tradition: Tradition::default(),
            output_format: OutputFormat::default(),
            include_english: false,
            date_display: DateDisplay::default(),
            gregorian_format: crate::format::ISO_DATE_FORMAT.to_string(),
            show_week_info: true,
            show_remaining_days: false,
            compact_output: false,
        }
    }
}
