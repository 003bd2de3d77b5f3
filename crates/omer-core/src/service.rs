//! Query operations over the count.
//!
//! `QueryService` composes a calendar bridge, a clock and a day enricher.
//! Every operation is a pure function of its arguments plus those parts; the
//! clock is only consulted for "today".

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::calendar::{month_name, CalendarBridge, HebrewMonth, HebrewYmd, IcuHebrewCalendar};
use crate::data::{liturgy, OmerTables, SefirahAttribute, Trilingual};
use crate::enrich::DayEnricher;
use crate::error::{OmerError, Result};
use crate::export::{self, CalendarExport, ExportFormat, ExportOutput};
use crate::mapper;
use crate::model::{
    CountingStatus, CurrentStatus, OmerDay, OmerWeek, Ordinal, OutsideStatus, WeekSummary,
};
use crate::tradition::{self, Recitation, Tradition};
use crate::validation::{self, IntegrityIssue};

/// Source of the current local date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The ways a day can be looked up by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateQuery {
    /// The clock's current date.
    Today,
    Gregorian(NaiveDate),
    /// A Hebrew day and month name (case-insensitive).
    Hebrew { day: u32, month: String },
}

/// Entry point for every query.
#[derive(Debug, Clone)]
pub struct QueryService<B = IcuHebrewCalendar, C = SystemClock> {
    bridge: B,
    clock: C,
    enricher: DayEnricher,
}

impl QueryService {
    /// Service over the ICU Hebrew calendar, the system clock and the
    /// shipped tables.
    pub fn new() -> Self {
        Self::with_parts(IcuHebrewCalendar, SystemClock)
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CalendarBridge, C: Clock> QueryService<B, C> {
    pub fn with_parts(bridge: B, clock: C) -> Self {
        Self::with_tables(bridge, clock, OmerTables::shipped())
    }

    pub fn with_tables(bridge: B, clock: C, tables: &'static OmerTables) -> Self {
        Self {
            bridge,
            clock,
            enricher: DayEnricher::new(tables),
        }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn tables(&self) -> &'static OmerTables {
        self.enricher.tables()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Day record for a raw day number.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `ordinal` is within 1..=49.
    pub fn by_ordinal(&self, ordinal: i64, tradition: Tradition) -> Result<OmerDay> {
        let ordinal = Ordinal::new(ordinal)?;
        Ok(self.enricher.enrich(ordinal, None, tradition))
    }

    /// Day record for a date.
    ///
    /// Gregorian lookups (including `Today`) carry their Gregorian date.
    pub fn by_date(&self, query: &DateQuery, tradition: Tradition) -> Result<OmerDay> {
        match query {
            DateQuery::Today => self.by_gregorian(self.clock.today(), tradition),
            DateQuery::Gregorian(date) => self.by_gregorian(*date, tradition),
            DateQuery::Hebrew { day, month } => {
                let ordinal = mapper::to_ordinal(*day, month)?;
                Ok(self.enricher.enrich(ordinal, None, tradition))
            }
        }
    }

    fn by_gregorian(&self, date: NaiveDate, tradition: Tradition) -> Result<OmerDay> {
        let ordinal = self.ordinal_on(date)?;
        Ok(self.enricher.enrich(ordinal, Some(date), tradition))
    }

    /// Ordinal counted on a Gregorian date.
    pub fn ordinal_on(&self, date: NaiveDate) -> Result<Ordinal> {
        let hebrew = self.bridge.to_hebrew(date)?;
        let month =
            HebrewMonth::from_index(hebrew.month).ok_or_else(|| OmerError::NotInOmerPeriod {
                day: u32::from(hebrew.day),
                month: month_name(hebrew.month).to_string(),
            })?;
        mapper::ordinal_for(u32::from(hebrew.day), month)
    }

    /// Hebrew date of a Gregorian date, whether or not it is in the count.
    pub fn hebrew_date_of(&self, date: NaiveDate) -> Result<HebrewYmd> {
        self.bridge.to_hebrew(date)
    }

    /// The seven days of a week, in order, dated when a Hebrew year is given.
    pub fn by_week(
        &self,
        week: i64,
        hebrew_year: Option<i32>,
        tradition: Tradition,
    ) -> Result<Vec<OmerDay>> {
        let week = OmerWeek::new(week)?;
        self.days_for(week.ordinals(), hebrew_year, tradition)
    }

    /// Gregorian date of 16 Nisan in `year`.
    fn count_start(&self, year: i32) -> Result<NaiveDate> {
        let first = mapper::to_hebrew_date(Ordinal::FIRST);
        self.bridge.to_gregorian(HebrewYmd::new(year, first.month.index(), first.day))
    }

    fn days_for(
        &self,
        ordinals: impl Iterator<Item = Ordinal>,
        hebrew_year: Option<i32>,
        tradition: Tradition,
    ) -> Result<Vec<OmerDay>> {
        let start = hebrew_year.map(|year| self.count_start(year)).transpose()?;
        ordinals
            .map(|ordinal| {
                let date = match start {
                    Some(start) => Some(day_after(start, ordinal)?),
                    None => None,
                };
                Ok(self.enricher.enrich(ordinal, date, tradition))
            })
            .collect()
    }

    /// Every Omer day between `start` and `end` inclusive, in date order.
    ///
    /// Dates that cannot be converted or fall outside the count are skipped.
    pub fn by_gregorian_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        tradition: Tradition,
    ) -> Result<Vec<OmerDay>> {
        if start > end {
            return Err(OmerError::InvertedRange { start, end });
        }
        let days = start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter_map(|date| match self.by_gregorian(date, tradition) {
                Ok(day) => Some(day),
                Err(err) => {
                    debug!(%date, error = %err, "skipping date outside the count");
                    None
                }
            })
            .collect();
        Ok(days)
    }

    /// All 49 days in order.
    ///
    /// With a Hebrew year each day carries its Gregorian date; without one
    /// the days are undated.
    pub fn all_days(&self, hebrew_year: Option<i32>, tradition: Tradition) -> Result<Vec<OmerDay>> {
        self.days_for(Ordinal::all(), hebrew_year, tradition)
    }

    /// Days that carry a special-day entry.
    pub fn find_special_days(&self, tradition: Tradition) -> Vec<OmerDay> {
        Ordinal::all()
            .map(|ordinal| self.enricher.enrich(ordinal, None, tradition))
            .filter(OmerDay::is_special_day)
            .collect()
    }

    /// A week's Sefirah and its seven days.
    pub fn summary_by_sefirah_week(
        &self,
        week: i64,
        hebrew_year: Option<i32>,
        tradition: Tradition,
    ) -> Result<WeekSummary> {
        let week = OmerWeek::new(week)?;
        let days = self.days_for(week.ordinals(), hebrew_year, tradition)?;
        Ok(WeekSummary {
            week,
            sefirah: self.tables().sefirah(week.get()).copied(),
            total_days: days.len(),
            days,
        })
    }

    /// What to count today. Never fails.
    pub fn current_status(&self, tradition: Tradition) -> CurrentStatus {
        self.status_on(self.clock.today(), tradition)
    }

    /// What to count on `date`. Never fails.
    pub fn status_on(&self, date: NaiveDate, tradition: Tradition) -> CurrentStatus {
        match self.by_gregorian(date, tradition) {
            Ok(day) => {
                let special_prayer = day.special_day_info.and_then(|entry| entry.prayer);
                CurrentStatus::Counting(Box::new(CountingStatus {
                    date,
                    weekday: *liturgy::weekday(date.weekday()),
                    blessing: self.blessing(tradition),
                    prayer: self.prayer(tradition),
                    kavanah: liturgy::KAVANAH,
                    special_prayer,
                    day,
                }))
            }
            Err(err) => {
                debug!(%date, error = %err, "date is not an Omer day");
                CurrentStatus::Outside(OutsideStatus::from_error(date, &err))
            }
        }
    }

    /// Structured calendar for a year (or undated without one).
    pub fn calendar_export(
        &self,
        hebrew_year: Option<i32>,
        tradition: Tradition,
    ) -> Result<CalendarExport> {
        let days = self.all_days(hebrew_year, tradition)?;
        let special_days = days.iter().filter(|day| day.is_special_day()).cloned().collect();
        Ok(CalendarExport {
            hebrew_year,
            total_days: days.len(),
            days,
            special_days,
            sefirot: self.sefirot(),
        })
    }

    /// Calendar in the requested export format.
    pub fn export_calendar(
        &self,
        format: ExportFormat,
        hebrew_year: Option<i32>,
        tradition: Tradition,
    ) -> Result<ExportOutput> {
        let calendar = self.calendar_export(hebrew_year, tradition)?;
        Ok(match format {
            ExportFormat::Json => ExportOutput::Structured(calendar),
            ExportFormat::Text => ExportOutput::Text(export::render_text(&calendar)),
        })
    }

    /// Hebrew year of the clock's current date.
    pub fn current_hebrew_year(&self) -> Result<i32> {
        Ok(self.bridge.to_hebrew(self.clock.today())?.year)
    }

    pub fn blessing(&self, tradition: Tradition) -> Recitation {
        tradition::blessing(self.tables(), tradition)
    }

    pub fn prayer(&self, tradition: Tradition) -> Recitation {
        tradition::prayer(self.tables(), tradition)
    }

    pub fn kavanah(&self) -> Trilingual {
        liturgy::KAVANAH
    }

    /// The seven lines of Ana BeKoach.
    pub fn ana_bekoach(&self) -> &'static [Trilingual] {
        &liturgy::ANA_BEKOACH
    }

    pub fn sefirot(&self) -> Vec<SefirahAttribute> {
        self.tables().sefirot.to_vec()
    }

    /// Integrity issues in this service's tables.
    pub fn validate(&self) -> Vec<IntegrityIssue> {
        validation::validate_tables(self.tables())
    }
}

/// The date `ordinal` falls on when day 1 is `start`.
fn day_after(start: NaiveDate, ordinal: Ordinal) -> Result<NaiveDate> {
    let offset = ordinal.index() as u64;
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| OmerError::conversion(start, format!("cannot add {offset} days")))
}
