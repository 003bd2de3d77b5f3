//! Query service behavior against a stub calendar and a fixed clock.

use chrono::{Days, NaiveDate};
use omer_core::data::Sefirah;
use omer_core::{
    CalendarBridge, DateQuery, ErrorKind, FixedClock, HebrewYmd, OmerError, QueryService,
    Result, Tradition,
};

/// Maps 1-5 May 2031 onto 16-20 Nisan and everything else onto Tishrei.
struct WindowBridge {
    start: NaiveDate,
}

impl WindowBridge {
    fn new() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2031, 5, 1).unwrap(),
        }
    }
}

impl CalendarBridge for WindowBridge {
    fn to_hebrew(&self, date: NaiveDate) -> Result<HebrewYmd> {
        let offset = (date - self.start).num_days();
        if (0..5).contains(&offset) {
            Ok(HebrewYmd::new(5791, 1, 16 + offset as u8))
        } else {
            Ok(HebrewYmd::new(5792, 7, 1))
        }
    }
}

/// Fails for every date.
struct BrokenBridge;

impl CalendarBridge for BrokenBridge {
    fn to_hebrew(&self, date: NaiveDate) -> Result<HebrewYmd> {
        Err(OmerError::conversion(date, "no calendar available"))
    }
}

fn service() -> QueryService<WindowBridge, FixedClock> {
    let bridge = WindowBridge::new();
    let clock = FixedClock(bridge.start);
    QueryService::with_parts(bridge, clock)
}

#[test]
fn test_range_over_stubbed_window() {
    let service = service();
    let start = NaiveDate::from_ymd_opt(2031, 5, 1).unwrap();
    let end = start.checked_add_days(Days::new(4)).unwrap();

    let days = service
        .by_gregorian_range(start, end, Tradition::Ashkenazi)
        .unwrap();

    let ordinals: Vec<u8> = days.iter().map(|day| day.ordinal.get()).collect();
    assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    assert_eq!(days[0].gregorian_date, Some(start));
}

#[test]
fn test_range_wider_than_window_skips_outside_days() {
    let service = service();
    let start = NaiveDate::from_ymd_opt(2031, 4, 28).unwrap();
    let end = NaiveDate::from_ymd_opt(2031, 5, 9).unwrap();
    let days = service
        .by_gregorian_range(start, end, Tradition::Ashkenazi)
        .unwrap();
    assert_eq!(days.len(), 5);
}

#[test]
fn test_weeks_partition_the_count() {
    let service = service();
    let mut seen = Vec::new();
    for week in 1..=7 {
        let days = service.by_week(week, None, Tradition::Ashkenazi).unwrap();
        assert_eq!(days.len(), 7);
        let expected: Vec<u8> = ((week as u8 - 1) * 7 + 1..=week as u8 * 7).collect();
        let actual: Vec<u8> = days.iter().map(|day| day.ordinal.get()).collect();
        assert_eq!(actual, expected);
        seen.extend(actual);
    }
    assert_eq!(seen, (1..=49).collect::<Vec<u8>>());
}

#[test]
fn test_week_out_of_range() {
    let service = service();
    for week in [0, 8, -1] {
        let err = service.by_week(week, None, Tradition::Ashkenazi).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}

#[test]
fn test_special_days_are_pesach_sheni_and_lag_baomer() {
    let service = service();
    let days = service.find_special_days(Tradition::Ashkenazi);
    let ordinals: Vec<u8> = days.iter().map(|day| day.ordinal.get()).collect();
    assert_eq!(ordinals, vec![18, 33]);
    for day in &days {
        let info = day.special_day_info.as_ref().unwrap();
        assert!(!info.name.is_empty());
        assert!(!info.description.is_empty());
    }
}

#[test]
fn test_sefirah_derivation() {
    let service = service();

    let first = service.by_ordinal(1, Tradition::Ashkenazi).unwrap();
    let combination = first.sefirah_combination.unwrap();
    assert_eq!(combination.week_attribute.sefirah, Sefirah::Chesed);
    assert_eq!(combination.day_attribute.sefirah, Sefirah::Chesed);

    let lag = service.by_ordinal(33, Tradition::Ashkenazi).unwrap();
    assert_eq!(lag.week_number(), 5);
    assert_eq!(lag.day_of_week(), 5);
    let combination = lag.sefirah_combination.unwrap();
    assert_eq!(combination.week_attribute.sefirah, Sefirah::Hod);
    assert_eq!(combination.day_attribute.sefirah, Sefirah::Hod);
}

#[test]
fn test_by_ordinal_is_idempotent() {
    let service = service();
    for n in [1, 18, 33, 49] {
        let a = service.by_ordinal(n, Tradition::Sefardi).unwrap();
        let b = service.by_ordinal(n, Tradition::Sefardi).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}

#[test]
fn test_by_ordinal_rejects_out_of_range() {
    let service = service();
    assert_eq!(
        service.by_ordinal(0, Tradition::Ashkenazi).unwrap_err().kind(),
        ErrorKind::Range
    );
    assert_eq!(
        service.by_ordinal(50, Tradition::Ashkenazi).unwrap_err().kind(),
        ErrorKind::Range
    );
}

#[test]
fn test_today_follows_fixed_clock() {
    let service = service();
    let day = service.by_date(&DateQuery::Today, Tradition::Ashkenazi).unwrap();
    assert_eq!(day.ordinal.get(), 1);
    assert!(service.current_status(Tradition::Ashkenazi).is_counting());
}

#[test]
fn test_one_way_bridge_cannot_date_a_year() {
    let service = service();
    let err = service.all_days(Some(5791), Tradition::Ashkenazi).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateConversion);
    assert_eq!(service.all_days(None, Tradition::Ashkenazi).unwrap().len(), 49);
}

#[test]
fn test_broken_bridge_degrades_gracefully() {
    let date = NaiveDate::from_ymd_opt(2031, 5, 1).unwrap();
    let service = QueryService::with_parts(BrokenBridge, FixedClock(date));

    let err = service
        .by_date(&DateQuery::Gregorian(date), Tradition::Ashkenazi)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateConversion);

    let status = service.current_status(Tradition::Ashkenazi);
    assert!(!status.is_counting());
    assert_eq!(status.date(), date);

    let days = service
        .by_gregorian_range(date, date, Tradition::Ashkenazi)
        .unwrap();
    assert!(days.is_empty());
}

#[test]
fn test_serialized_day_has_derived_fields() {
    let service = service();
    let day = service.by_ordinal(14, Tradition::Chassidic).unwrap();
    let value = serde_json::to_value(&day).unwrap();
    assert_eq!(value["ordinal"], 14);
    assert_eq!(value["week_number"], 2);
    assert_eq!(value["day_of_week"], 7);
    assert_eq!(value["is_complete_week"], true);
    assert_eq!(value["days_remaining"], 35);
    assert_eq!(value["is_special_day"], false);
    assert_eq!(value["hebrew_date"]["month"], "Iyyar");
    assert_eq!(value["tradition"], "chassidic");
}

#[test]
fn test_shipped_tables_validate_clean() {
    assert!(service().validate().is_empty());
}
