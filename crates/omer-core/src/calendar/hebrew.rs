//! Hebrew calendar bridge backed by `icu_calendar`.
//!
//! ICU numbers months from Tishrei in civil order; the bridge reports the
//! biblical numbering instead, so the two are converted at this boundary.

use chrono::{Datelike, NaiveDate};
use icu_calendar::hebrew::Hebrew;
use icu_calendar::{Date, Iso};

use super::bridge::{CalendarBridge, HebrewYmd};
use crate::error::{OmerError, Result};

const TISHREI: u8 = 7;

/// Nisan through Elul, counted after Tishrei..Adar in civil order.
const NISAN_TO_ELUL: u8 = 6;

/// Civil ordinal (Tishrei = 1) to biblical month (Nisan = 1).
fn biblical_month(ordinal: u8, months_in_year: u8) -> u8 {
    let tishrei_to_adar = months_in_year - NISAN_TO_ELUL;
    if ordinal <= tishrei_to_adar {
        ordinal + NISAN_TO_ELUL
    } else {
        ordinal - tishrei_to_adar
    }
}

/// Biblical month (Nisan = 1) to civil ordinal (Tishrei = 1).
fn civil_month(month: u8, months_in_year: u8) -> u8 {
    if month >= TISHREI {
        month - NISAN_TO_ELUL
    } else {
        month + months_in_year - NISAN_TO_ELUL
    }
}

fn narrow(value: u32, date: impl std::fmt::Display) -> Result<u8> {
    u8::try_from(value).map_err(|_| OmerError::conversion(date, "calendar field out of range"))
}

/// 1 Tishrei of `year`, which carries the year's month count.
fn new_year(year: i32) -> Result<Date<Hebrew>> {
    Date::try_new_hebrew_date(year, 1, 1)
        .map_err(|e| OmerError::conversion(HebrewYmd::new(year, TISHREI, 1), e.to_string()))
}

/// Number of months in `year`: 12, or 13 in a leap year.
pub fn months_in_year(year: i32) -> Result<u8> {
    Ok(new_year(year)?.months_in_year())
}

/// Number of days in `month` (biblical numbering) of `year`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    let months = months_in_year(year)?;
    if month == 0 || month > months {
        return Err(OmerError::conversion(
            HebrewYmd::new(year, month, 1),
            format!("month {month} does not exist in year {year}"),
        ));
    }
    let first = Date::try_new_hebrew_date(year, civil_month(month, months), 1)
        .map_err(|e| OmerError::conversion(HebrewYmd::new(year, month, 1), e.to_string()))?;
    Ok(first.days_in_month())
}

/// The shipped calendar bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IcuHebrewCalendar;

impl IcuHebrewCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl CalendarBridge for IcuHebrewCalendar {
    fn to_hebrew(&self, date: NaiveDate) -> Result<HebrewYmd> {
        let month = narrow(date.month(), date)?;
        let day = narrow(date.day(), date)?;
        let iso: Date<Iso> = Date::try_new_iso_date(date.year(), month, day)
            .map_err(|e| OmerError::conversion(date, e.to_string()))?;
        let hebrew = iso.to_calendar(Hebrew::new());

        let year = hebrew.year().number;
        if year < 1 {
            return Err(OmerError::conversion(
                date,
                "date precedes the start of the Hebrew calendar",
            ));
        }
        let ordinal = narrow(hebrew.month().ordinal, date)?;
        let day = narrow(hebrew.day_of_month().0, date)?;
        Ok(HebrewYmd::new(year, biblical_month(ordinal, hebrew.months_in_year()), day))
    }

    fn to_gregorian(&self, date: HebrewYmd) -> Result<NaiveDate> {
        if date.year < 1 {
            return Err(OmerError::conversion(date, "year must be 1 or later"));
        }
        let max = days_in_month(date.year, date.month)?;
        if date.day == 0 || date.day > max {
            return Err(OmerError::conversion(date, format!("day must be between 1 and {max}")));
        }
        let months = months_in_year(date.year)?;
        let iso = Date::try_new_hebrew_date(date.year, civil_month(date.month, months), date.day)
            .map_err(|e| OmerError::conversion(date, e.to_string()))?
            .to_iso();
        NaiveDate::from_ymd_opt(iso.year().number, iso.month().ordinal, iso.day_of_month().0)
            .ok_or_else(|| OmerError::conversion(date, "date is outside the supported range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const KNOWN: &[((i32, u32, u32), (i32, u8, u8))] = &[
        ((2024, 4, 24), (5784, 1, 16)),
        ((2024, 5, 26), (5784, 2, 18)),
        ((2024, 6, 11), (5784, 3, 5)),
        ((2024, 6, 12), (5784, 3, 6)),
        ((2024, 10, 3), (5785, 7, 1)),
        ((2025, 4, 14), (5785, 1, 16)),
        ((2025, 6, 1), (5785, 3, 5)),
        ((2023, 4, 7), (5783, 1, 16)),
        ((2000, 1, 1), (5760, 10, 23)),
        ((2026, 4, 3), (5786, 1, 16)),
        ((2024, 3, 24), (5784, 13, 14)),
        ((2026, 9, 15), (5787, 7, 4)),
    ];

    #[test]
    fn test_known_dates_to_hebrew() {
        let calendar = IcuHebrewCalendar;
        for &((gy, gm, gd), (hy, hm, hd)) in KNOWN {
            let hebrew = calendar.to_hebrew(ymd(gy, gm, gd)).unwrap();
            assert_eq!(hebrew, HebrewYmd::new(hy, hm, hd), "{gy}-{gm}-{gd}");
        }
    }

    #[test]
    fn test_known_dates_to_gregorian() {
        let calendar = IcuHebrewCalendar;
        for &((gy, gm, gd), (hy, hm, hd)) in KNOWN {
            let gregorian = calendar.to_gregorian(HebrewYmd::new(hy, hm, hd)).unwrap();
            assert_eq!(gregorian, ymd(gy, gm, gd));
        }
    }

    #[test]
    fn test_early_tishrei_5787_resolves() {
        let mut date = ymd(2026, 9, 12);
        for day in 1..=21u8 {
            let hebrew = IcuHebrewCalendar.to_hebrew(date).unwrap();
            assert_eq!(hebrew, HebrewYmd::new(5787, 7, day), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_every_day_round_trips_1600_to_2400() {
        let end = ymd(2400, 1, 1);
        let mut date = ymd(1600, 1, 1);
        let mut previous: Option<HebrewYmd> = None;
        while date < end {
            let hebrew = IcuHebrewCalendar.to_hebrew(date).unwrap();
            assert_eq!(IcuHebrewCalendar.to_gregorian(hebrew).unwrap(), date);
            if let Some(prev) = previous {
                let next_day = hebrew.year == prev.year
                    && hebrew.month == prev.month
                    && hebrew.day == prev.day + 1;
                assert!(next_day || hebrew.day == 1, "{date}: {prev} -> {hebrew}");
            }
            previous = Some(hebrew);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_month_counts() {
        assert_eq!(months_in_year(5784).unwrap(), 13);
        assert_eq!(months_in_year(5785).unwrap(), 12);
    }

    #[test]
    fn test_omer_months_have_fixed_lengths() {
        for year in 5700..5900 {
            assert_eq!(days_in_month(year, 1).unwrap(), 30);
            assert_eq!(days_in_month(year, 2).unwrap(), 29);
            assert_eq!(days_in_month(year, 3).unwrap(), 30);
        }
    }

    #[test]
    fn test_month_mapping_in_leap_and_common_years() {
        // 13 months: Tishrei..Adar II is 7 civil months, Nisan is the 8th.
        assert_eq!(civil_month(1, 13), 8);
        assert_eq!(civil_month(13, 13), 7);
        assert_eq!(civil_month(7, 13), 1);
        assert_eq!(civil_month(1, 12), 7);
        assert_eq!(civil_month(6, 12), 12);
        for months in [12, 13] {
            for month in 1..=months {
                assert_eq!(biblical_month(civil_month(month, months), months), month);
            }
        }
    }

    #[test]
    fn test_rejects_nonexistent_month() {
        let err = IcuHebrewCalendar.to_gregorian(HebrewYmd::new(5785, 13, 1)).unwrap_err();
        assert!(matches!(err, OmerError::DateConversion { .. }));
    }

    #[test]
    fn test_rejects_day_past_month_end() {
        let err = IcuHebrewCalendar.to_gregorian(HebrewYmd::new(5784, 2, 30)).unwrap_err();
        assert!(matches!(err, OmerError::DateConversion { .. }));
    }

    #[test]
    fn test_rejects_dates_before_epoch() {
        let err = IcuHebrewCalendar.to_hebrew(ymd(-3800, 1, 1)).unwrap_err();
        assert!(matches!(err, OmerError::DateConversion { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            .. ProptestConfig::default()
        })]

        #[test]
        fn prop_hebrew_round_trip(year in 5000i32..6500, month in 1u8..=12, day in 1u8..=29) {
            let hebrew = HebrewYmd::new(year, month, day);
            let gregorian = IcuHebrewCalendar.to_gregorian(hebrew).unwrap();
            prop_assert_eq!(IcuHebrewCalendar.to_hebrew(gregorian).unwrap(), hebrew);
        }
    }
}
