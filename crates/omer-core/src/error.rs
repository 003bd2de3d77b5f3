//! Error types for Omer core operations.
//!
//! Every query returns either a valid record or one of these errors. The
//! variants group into a closed set of [`ErrorKind`]s; the CLI layer maps
//! kinds to exit codes and uses [`OmerError::short_message`] for the
//! localized one-line text.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::calendar::HebrewMonth;
use crate::data::messages::{self, LocalizedMessage};
use crate::validation::IntegrityIssue;

/// Result type alias for Omer operations.
pub type Result<T> = std::result::Result<T, OmerError>;

/// What a range error was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSubject {
    /// An Omer day ordinal (1-49)
    Ordinal,
    /// An Omer week number (1-7)
    Week,
}

impl fmt::Display for RangeSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal => write!(f, "Omer day"),
            Self::Week => write!(f, "Omer week"),
        }
    }
}

/// Closed classification of [`OmerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Range,
    InvalidHebrewMonth,
    InvalidHebrewDay,
    NotInOmerPeriod,
    DateConversion,
    DataIntegrity,
}

/// Core error type for Omer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OmerError {
    /// Ordinal or week number outside its numeric bounds
    #[error("{subject} must be between {min} and {max}, got {value}")]
    OutOfRange {
        subject: RangeSubject,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Gregorian range whose start lies after its end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    /// Month name other than Nisan, Iyyar or Sivan
    #[error("Invalid Hebrew month: {month} (expected Nisan, Iyyar, or Sivan)")]
    InvalidHebrewMonth { month: String },

    /// Day outside the month's calendar length
    #[error("Invalid day for {month}: {day} (must be between 1 and {max})")]
    InvalidHebrewDay {
        day: u32,
        month: HebrewMonth,
        max: u8,
    },

    /// Valid Hebrew date outside Nisan 16 - Sivan 5
    #[error("{day} {month} is not within the Sefirat HaOmer period")]
    NotInOmerPeriod { day: u32, month: String },

    /// The calendar bridge could not resolve a date
    #[error("Cannot convert {date}: {reason}")]
    DateConversion { date: String, reason: String },

    /// Static tables are missing expected entries
    #[error("Data integrity check failed with {} issue(s)", issues.len())]
    DataIntegrity { issues: Vec<IntegrityIssue> },
}

impl OmerError {
    /// Build a conversion error for a date that could not be resolved.
    pub fn conversion(date: impl fmt::Display, reason: impl Into<String>) -> Self {
        OmerError::DateConversion {
            date: date.to_string(),
            reason: reason.into(),
        }
    }

    /// The closed error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::InvertedRange { .. } => ErrorKind::Range,
            Self::InvalidHebrewMonth { .. } => ErrorKind::InvalidHebrewMonth,
            Self::InvalidHebrewDay { .. } => ErrorKind::InvalidHebrewDay,
            Self::NotInOmerPeriod { .. } => ErrorKind::NotInOmerPeriod,
            Self::DateConversion { .. } => ErrorKind::DateConversion,
            Self::DataIntegrity { .. } => ErrorKind::DataIntegrity,
        }
    }

    /// Short user-facing message in English and Hebrew.
    pub fn short_message(&self) -> &'static LocalizedMessage {
        match self {
            Self::OutOfRange {
                subject: RangeSubject::Ordinal,
                ..
            } => &messages::DAY_OUT_OF_RANGE,
            Self::OutOfRange {
                subject: RangeSubject::Week,
                ..
            } => &messages::WEEK_OUT_OF_RANGE,
            Self::InvertedRange { .. } => &messages::INVALID_DATE_RANGE,
            Self::InvalidHebrewMonth { .. } => &messages::INVALID_MONTH,
            Self::InvalidHebrewDay { .. } => &messages::INVALID_DAY,
            Self::NotInOmerPeriod { .. } => &messages::NOT_IN_PERIOD,
            Self::DateConversion { .. } => &messages::DATE_ERROR,
            Self::DataIntegrity { .. } => &messages::DATA_INTEGRITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_range_variants() {
        let out_of_range = OmerError::OutOfRange {
            subject: RangeSubject::Ordinal,
            value: 50,
            min: 1,
            max: 49,
        };
        let inverted = OmerError::InvertedRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(out_of_range.kind(), ErrorKind::Range);
        assert_eq!(inverted.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_display_includes_bounds() {
        let err = OmerError::OutOfRange {
            subject: RangeSubject::Week,
            value: 8,
            min: 1,
            max: 7,
        };
        assert_eq!(err.to_string(), "Omer week must be between 1 and 7, got 8");
    }

    #[test]
    fn test_short_message_has_both_languages() {
        let err = OmerError::NotInOmerPeriod {
            day: 6,
            month: "Sivan".to_string(),
        };
        let message = err.short_message();
        assert!(!message.english.is_empty());
        assert!(!message.hebrew.is_empty());
    }

    #[test]
    fn test_invalid_day_names_month() {
        let err = OmerError::InvalidHebrewDay {
            day: 30,
            month: HebrewMonth::Iyyar,
            max: 29,
        };
        assert_eq!(
            err.to_string(),
            "Invalid day for Iyyar: 30 (must be between 1 and 29)"
        );
    }
}
