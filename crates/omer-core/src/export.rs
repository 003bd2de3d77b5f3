//! Whole-calendar export.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::UnknownVariantError;
use crate::data::SefirahAttribute;
use crate::format::ISO_DATE_FORMAT;
use crate::model::OmerDay;

/// Width of the rule between text blocks.
const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Text => "text",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(UnknownVariantError {
                what: "export format",
                value: s.to_string(),
                expected: "json, text",
            }),
        }
    }
}

/// The full calendar with its special-day subset and Sefirah table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarExport {
    pub hebrew_year: Option<i32>,
    pub total_days: usize,
    pub days: Vec<OmerDay>,
    pub special_days: Vec<OmerDay>,
    pub sefirot: Vec<SefirahAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    Structured(CalendarExport),
    Text(String),
}

impl ExportOutput {
    /// The export as it should be written out: pretty JSON or plain text.
    pub fn render(&self) -> serde_json::Result<String> {
        match self {
            Self::Structured(calendar) => serde_json::to_string_pretty(calendar),
            Self::Text(text) => Ok(text.clone()),
        }
    }
}

/// Sequential text blocks, one per day, separated by a rule.
pub fn render_text(calendar: &CalendarExport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, calendar);
    out
}

fn write_text(out: &mut String, calendar: &CalendarExport) -> fmt::Result {
    match calendar.hebrew_year {
        Some(year) => writeln!(out, "Sefirat HaOmer Calendar - {year}")?,
        None => writeln!(out, "Sefirat HaOmer Calendar")?,
    }
    writeln!(out, "Total days: {}", calendar.total_days)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let rule = "-".repeat(RULE_WIDTH);
    for day in &calendar.days {
        writeln!(out, "Day {} of the Omer", day.ordinal)?;
        writeln!(out, "Hebrew date: {}", day.hebrew_date)?;
        if let Some(date) = day.gregorian_date {
            writeln!(out, "Gregorian date: {}", date.format(ISO_DATE_FORMAT))?;
        }
        writeln!(out, "{}", day.hebrew_text)?;
        writeln!(out, "{}", day.transliteration)?;
        writeln!(out, "{}", day.english_text)?;
        if let Some(combination) = &day.sefirah_combination {
            writeln!(
                out,
                "Sefirah: {} ({})",
                combination.combined_transliteration, combination.combined_english
            )?;
        }
        if let Some(special) = &day.special_day_info {
            writeln!(out, "Special: {} - {}", special.name, special.description)?;
        }
        writeln!(out, "{rule}")?;
    }
    Ok(())
}
