//! Calendar bridge trait definition.
//!
//! The `CalendarBridge` trait is the seam between the count and whatever
//! performs Gregorian to Hebrew conversion. The crate ships one backed by
//! `icu_calendar`; tests and embedders can supply their own.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{OmerError, Result};

/// A full Hebrew date as produced by a bridge.
///
/// `month` uses the biblical numbering (Nisan = 1, Tishrei = 7, Adar II = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HebrewYmd {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl HebrewYmd {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for HebrewYmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            super::month_name(self.month),
            self.year
        )
    }
}

/// Gregorian to Hebrew conversion.
///
/// Implementations must be pure: the same input always yields the same
/// output, and failures are reported as `OmerError::DateConversion` rather
/// than panics.
pub trait CalendarBridge: Send + Sync {
    /// Convert a Gregorian date to its Hebrew date.
    ///
    /// # Errors
    ///
    /// Returns `OmerError::DateConversion` if the date is outside the range
    /// the bridge supports.
    fn to_hebrew(&self, date: NaiveDate) -> Result<HebrewYmd>;

    /// Convert a Hebrew date back to the Gregorian calendar.
    ///
    /// Bridges that only convert one way can rely on the default, which
    /// always fails.
    fn to_gregorian(&self, date: HebrewYmd) -> Result<NaiveDate> {
        Err(OmerError::conversion(
            date,
            "this calendar bridge does not convert Hebrew dates to Gregorian",
        ))
    }
}

impl<B: CalendarBridge + ?Sized> CalendarBridge for Box<B> {
    fn to_hebrew(&self, date: NaiveDate) -> Result<HebrewYmd> {
        (**self).to_hebrew(date)
    }

    fn to_gregorian(&self, date: HebrewYmd) -> Result<NaiveDate> {
        (**self).to_gregorian(date)
    }
}
