//! Value types produced by queries.
//!
//! All records are built on demand and never mutated afterwards.

use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::calendar::HebrewDate;
use crate::data::messages::LocalizedMessage;
use crate::data::{SefirahAttribute, SpecialDayEntry, Trilingual};
use crate::error::{ErrorKind, OmerError, RangeSubject, Result};
use crate::tradition::{Recitation, Tradition};
use crate::{OMER_PERIOD_DAYS, OMER_WEEKS};

/// A day of the count, always within 1..=49.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ordinal(u8);

impl Ordinal {
    pub const FIRST: Ordinal = Ordinal(1);
    pub const LAST: Ordinal = Ordinal(OMER_PERIOD_DAYS);

    /// # Errors
    ///
    /// Returns `OmerError::OutOfRange` unless `value` is within 1..=49.
    pub fn new(value: i64) -> Result<Self> {
        if (1..=i64::from(OMER_PERIOD_DAYS)).contains(&value) {
            // Bounded above by 49.
            Ok(Self(value as u8))
        } else {
            Err(OmerError::OutOfRange {
                subject: RangeSubject::Ordinal,
                value,
                min: 1,
                max: i64::from(OMER_PERIOD_DAYS),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position for table lookups.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn week(self) -> OmerWeek {
        OmerWeek(self.week_number())
    }

    pub fn week_number(self) -> u8 {
        (self.0 - 1) / 7 + 1
    }

    /// Position 1-7 within the Omer week.
    pub fn day_of_week(self) -> u8 {
        (self.0 - 1) % 7 + 1
    }

    pub fn is_complete_week(self) -> bool {
        self.0 % 7 == 0
    }

    pub fn days_remaining(self) -> u8 {
        OMER_PERIOD_DAYS - self.0
    }

    /// Every ordinal in counting order.
    pub fn all() -> impl DoubleEndedIterator<Item = Ordinal> + ExactSizeIterator {
        (1..=OMER_PERIOD_DAYS).map(Ordinal)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A week of the count, always within 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OmerWeek(u8);

impl OmerWeek {
    /// # Errors
    ///
    /// Returns `OmerError::OutOfRange` unless `value` is within 1..=7.
    pub fn new(value: i64) -> Result<Self> {
        if (1..=i64::from(OMER_WEEKS)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(OmerError::OutOfRange {
                subject: RangeSubject::Week,
                value,
                min: 1,
                max: i64::from(OMER_WEEKS),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The seven ordinals of this week, in order.
    pub fn ordinals(self) -> impl Iterator<Item = Ordinal> {
        let first = (self.0 - 1) * 7 + 1;
        (first..first + 7).map(Ordinal)
    }

    pub fn all() -> impl Iterator<Item = OmerWeek> {
        (1..=OMER_WEEKS).map(OmerWeek)
    }
}

impl fmt::Display for OmerWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Day quality within week quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SefirahCombination {
    pub week_attribute: SefirahAttribute,
    pub day_attribute: SefirahAttribute,
    pub combined_hebrew: String,
    pub combined_transliteration: String,
    pub combined_english: String,
}

impl SefirahCombination {
    pub fn new(week_attribute: SefirahAttribute, day_attribute: SefirahAttribute) -> Self {
        Self {
            combined_hebrew: format!("{} שֶׁבְּ{}", day_attribute.hebrew, week_attribute.hebrew),
            combined_transliteration: format!(
                "{} sheb'{}",
                day_attribute.transliteration, week_attribute.transliteration
            ),
            combined_english: format!(
                "{} within {}",
                day_attribute.english, week_attribute.english
            ),
            week_attribute,
            day_attribute,
        }
    }
}

/// A fully enriched day of the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmerDay {
    pub ordinal: Ordinal,
    pub hebrew_text: String,
    pub transliteration: String,
    pub english_text: String,
    pub hebrew_date: HebrewDate,
    pub gregorian_date: Option<NaiveDate>,
    pub sefirah_combination: Option<SefirahCombination>,
    pub special_day_info: Option<SpecialDayEntry>,
    /// Tradition the record was requested under.
    pub tradition: Tradition,
}

impl OmerDay {
    pub fn week_number(&self) -> u8 {
        self.ordinal.week_number()
    }

    pub fn day_of_week(&self) -> u8 {
        self.ordinal.day_of_week()
    }

    pub fn is_complete_week(&self) -> bool {
        self.ordinal.is_complete_week()
    }

    pub fn days_remaining(&self) -> u8 {
        self.ordinal.days_remaining()
    }

    pub fn is_special_day(&self) -> bool {
        self.special_day_info.is_some()
    }
}

impl Serialize for OmerDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OmerDay", 14)?;
        state.serialize_field("ordinal", &self.ordinal)?;
        state.serialize_field("hebrew_text", &self.hebrew_text)?;
        state.serialize_field("transliteration", &self.transliteration)?;
        state.serialize_field("english_text", &self.english_text)?;
        state.serialize_field("week_number", &self.week_number())?;
        state.serialize_field("day_of_week", &self.day_of_week())?;
        state.serialize_field("is_complete_week", &self.is_complete_week())?;
        state.serialize_field("days_remaining", &self.days_remaining())?;
        state.serialize_field("hebrew_date", &self.hebrew_date)?;
        state.serialize_field("gregorian_date", &self.gregorian_date)?;
        state.serialize_field("sefirah_combination", &self.sefirah_combination)?;
        state.serialize_field("is_special_day", &self.is_special_day())?;
        state.serialize_field("special_day_info", &self.special_day_info)?;
        state.serialize_field("tradition", &self.tradition)?;
        state.end()
    }
}

/// One week of the count under its Sefirah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub week: OmerWeek,
    pub sefirah: Option<SefirahAttribute>,
    pub days: Vec<OmerDay>,
    pub total_days: usize,
}

/// Everything needed to count on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountingStatus {
    pub date: NaiveDate,
    pub day: OmerDay,
    pub weekday: Trilingual,
    pub blessing: Recitation,
    pub prayer: Recitation,
    pub kavanah: Trilingual,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_prayer: Option<Trilingual>,
}

/// Why a date is not an Omer day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutsideStatus {
    pub date: NaiveDate,
    pub reason: ErrorKind,
    pub message: String,
    pub localized: LocalizedMessage,
}

impl OutsideStatus {
    pub fn from_error(date: NaiveDate, error: &OmerError) -> Self {
        Self {
            date,
            reason: error.kind(),
            message: error.to_string(),
            localized: *error.short_message(),
        }
    }
}

/// Result of asking "what should be counted today?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurrentStatus {
    Counting(Box<CountingStatus>),
    Outside(OutsideStatus),
}

impl CurrentStatus {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Counting(status) => status.date,
            Self::Outside(status) => status.date,
        }
    }

    pub fn is_counting(&self) -> bool {
        matches!(self, Self::Counting(_))
    }

    pub fn day(&self) -> Option<&OmerDay> {
        match self {
            Self::Counting(status) => Some(&status.day),
            Self::Outside(_) => None,
        }
    }
}
