//! Calendar layer: the Gregorian to Hebrew bridge and the Hebrew months that
//! take part in the count.
//!
//! Month indices follow the biblical numbering used by the bridge: Nisan is
//! month 1, Tishrei month 7, and a leap year's second Adar is month 13.

mod bridge;
mod hebrew;
mod month;

pub use hebrew::{days_in_month, months_in_year, IcuHebrewCalendar};
pub use bridge::{CalendarBridge, HebrewYmd};
pub use month::{month_name, HebrewDate, HebrewMonth};
