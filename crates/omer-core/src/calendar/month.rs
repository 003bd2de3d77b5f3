//! The three Hebrew months spanned by the count.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OmerError, Result};

/// A Hebrew month that contains Omer days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HebrewMonth {
    Nisan,
    Iyyar,
    Sivan,
}

impl HebrewMonth {
    /// All admissible months, in calendar order.
    pub const ALL: [HebrewMonth; 3] = [Self::Nisan, Self::Iyyar, Self::Sivan];

    /// Parse a month name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OmerError::InvalidHebrewMonth {
                month: name.to_string(),
            })
    }

    /// Map a bridge month index (Nisan = 1) to a month, if it is one of ours.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Nisan),
            2 => Some(Self::Iyyar),
            3 => Some(Self::Sivan),
            _ => None,
        }
    }

    /// Bridge month index (Nisan = 1).
    pub fn index(self) -> u8 {
        match self {
            Self::Nisan => 1,
            Self::Iyyar => 2,
            Self::Sivan => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Nisan => "Nisan",
            Self::Iyyar => "Iyyar",
            Self::Sivan => "Sivan",
        }
    }

    pub fn hebrew_name(self) -> &'static str {
        match self {
            Self::Nisan => "נִיסָן",
            Self::Iyyar => "אִיָּר",
            Self::Sivan => "סִיוָן",
        }
    }

    /// Full calendar length of the month.
    ///
    /// These three months have a fixed length in every year.
    pub fn length(self) -> u8 {
        match self {
            Self::Nisan => 30,
            Self::Iyyar => 29,
            Self::Sivan => 30,
        }
    }

    /// Days of this month that fall inside the count.
    pub fn omer_days(self) -> RangeInclusive<u32> {
        match self {
            Self::Nisan => 16..=30,
            Self::Iyyar => 1..=29,
            Self::Sivan => 1..=5,
        }
    }

    /// Whether `day` is a calendar day of this month.
    pub fn has_day(self, day: u32) -> bool {
        (1..=u32::from(self.length())).contains(&day)
    }

    /// Offset added to the day of month to obtain the ordinal.
    pub(crate) fn ordinal_offset(self) -> i64 {
        match self {
            Self::Nisan => -15,
            Self::Iyyar => 15,
            Self::Sivan => 44,
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HebrewMonth {
    type Err = OmerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A day within one of the admissible months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HebrewDate {
    pub day: u8,
    pub month: HebrewMonth,
}

impl HebrewDate {
    pub fn new(day: u8, month: HebrewMonth) -> Self {
        Self { day, month }
    }

    /// Render with the Hebrew month name (e.g. "16 נִיסָן").
    pub fn hebrew_display(&self) -> String {
        format!("{} {}", self.day, self.month.hebrew_name())
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}

/// English name for any bridge month index.
///
/// Index 12 is reported as "Adar" and 13 as "Adar II"; unknown indices yield
/// "Unknown".
pub fn month_name(index: u8) -> &'static str {
    match index {
        1 => "Nisan",
        2 => "Iyyar",
        3 => "Sivan",
        4 => "Tammuz",
        5 => "Av",
        6 => "Elul",
        7 => "Tishrei",
        8 => "Cheshvan",
        9 => "Kislev",
        10 => "Tevet",
        11 => "Shevat",
        12 => "Adar",
        13 => "Adar II",
        _ => "Unknown",
    }
}
