//! Build date source.
//!
//! The sitemap stamps every entry with the date of the build, not the
//! modification time of a record. The date is read through [`Clock`] so a
//! build can be pinned to a fixed day.

use chrono::{Local, NaiveDate};

/// Source of "today" for a build.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today as `YYYY-MM-DD`.
    fn today_ymd(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
