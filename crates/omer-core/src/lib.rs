//! # Omer Core
//!
//! Core library for Omer - a calculator for Sefirat HaOmer, the 49-day count
//! between the second night of Passover and Shavuot.
//!
//! This crate translates between Gregorian dates, Hebrew dates and the 1-49
//! ordinal of the count, and enriches each ordinal with its counting text,
//! Sefirah combination and special-day information. It is independent of the
//! CLI interface: nothing here reads files, environment variables or the
//! system clock behind the caller's back.
//!
//! ## Architecture
//!
//! - **calendar**: Gregorian to Hebrew conversion (`CalendarBridge`) and the
//!   admissible Hebrew months
//! - **mapper**: Hebrew date <-> ordinal mapping and period membership
//! - **data**: Static liturgical tables (texts, Sefirot, special days, traditions)
//! - **enrich**: Assembles full `OmerDay` records from an ordinal
//! - **tradition**: Tradition-specific overlays on blessings and prayers
//! - **service**: The public query operations (`QueryService`)
//! - **export**: Calendar export in structured and text form
//! - **validation**: Integrity checks over the static tables
//! - **config** / **format**: Display preferences and text selection
//!
//! ## Example
//!
//! ```
//! use omer_core::{QueryService, Tradition};
//!
//! let service = QueryService::new();
//! let day = service.by_ordinal(33, Tradition::Ashkenazi).unwrap();
//! assert!(day.is_special_day());
//! assert_eq!(day.hebrew_date.to_string(), "18 Iyyar");
//! ```

pub mod calendar;
pub mod config;
pub mod data;
pub mod enrich;
pub mod error;
pub mod export;
pub mod format;
pub mod mapper;
pub mod model;
pub mod service;
pub mod tradition;
pub mod validation;

pub use calendar::{CalendarBridge, HebrewDate, HebrewMonth, HebrewYmd, IcuHebrewCalendar};
pub use config::{DateDisplay, OmerConfig, OutputFormat, UnknownVariantError};
pub use data::{OmerTables, SefirahAttribute, SpecialDayEntry, Trilingual};
pub use enrich::DayEnricher;
pub use error::{ErrorKind, OmerError, RangeSubject, Result};
pub use export::{CalendarExport, ExportFormat, ExportOutput};
pub use model::{
    CountingStatus, CurrentStatus, OmerDay, OmerWeek, Ordinal, OutsideStatus, SefirahCombination,
    WeekSummary,
};
pub use service::{Clock, DateQuery, FixedClock, QueryService, SystemClock};
pub use tradition::{Recitation, RecitationKind, Tradition, UnknownTradition};
pub use validation::{IntegrityIssue, IntegrityTable};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of days in the counting period.
pub const OMER_PERIOD_DAYS: u8 = 49;

/// Number of weeks in the counting period.
pub const OMER_WEEKS: u8 = 7;

/// Number of Sefirot used by the count.
pub const SEFIROT_COUNT: u8 = 7;
