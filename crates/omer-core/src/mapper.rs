//! Mapping between Hebrew dates and ordinals.
//!
//! The count runs from 16 Nisan (day 1) to 5 Sivan (day 49). Nisan, Iyyar
//! and Sivan have the same length every year, so the mapping needs no
//! calendar arithmetic.

use crate::calendar::{HebrewDate, HebrewMonth};
use crate::error::{OmerError, Result};
use crate::model::Ordinal;

/// Whether `day` of `month` falls inside the count.
///
/// Unknown month names are simply not in the period.
pub fn is_in_omer_period(day: u32, month: &str) -> bool {
    HebrewMonth::parse(month).is_ok_and(|month| month.omer_days().contains(&day))
}

/// Ordinal for a Hebrew day and month name.
///
/// # Errors
///
/// - `InvalidHebrewMonth` if `month` is not Nisan, Iyyar or Sivan
/// - `InvalidHebrewDay` if `day` is not a day of that month
/// - `NotInOmerPeriod` if the date is valid but outside the count
pub fn to_ordinal(day: u32, month: &str) -> Result<Ordinal> {
    ordinal_for(day, HebrewMonth::parse(month)?)
}

/// Ordinal for a day of an already-parsed month.
pub fn ordinal_for(day: u32, month: HebrewMonth) -> Result<Ordinal> {
    if !month.has_day(day) {
        return Err(OmerError::InvalidHebrewDay {
            day,
            month,
            max: month.length(),
        });
    }
    if !month.omer_days().contains(&day) {
        return Err(OmerError::NotInOmerPeriod {
            day,
            month: month.name().to_string(),
        });
    }
    Ordinal::new(i64::from(day) + month.ordinal_offset())
}

/// Hebrew date of an ordinal.
pub fn to_hebrew_date(ordinal: Ordinal) -> HebrewDate {
    let value = ordinal.get();
    match value {
        1..=15 => HebrewDate::new(value + 15, HebrewMonth::Nisan),
        16..=44 => HebrewDate::new(value - 15, HebrewMonth::Iyyar),
        _ => HebrewDate::new(value - 44, HebrewMonth::Sivan),
    }
}

/// Hebrew date of a raw day number.
///
/// # Errors
///
/// Returns `OutOfRange` unless `value` is within 1..=49.
pub fn hebrew_date_for(value: i64) -> Result<HebrewDate> {
    Ordinal::new(value).map(to_hebrew_date)
}
