//! This module implements `Date`, a calendar date.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::parsers::parse_date;
use crate::{utils, TimeError, TimeResult};

/// A calendar date (year, month, day) with UTC timezone.
///
/// The canonical wire form is the fixed-width `YYYY-MM-DD` layout, which
/// bounds the year to 0..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a new `Date`, validating that the month and day are within
    /// their usual ranges.
    pub fn try_new(year: i32, month: u8, day: u8) -> TimeResult<Self> {
        if !(0..=9999).contains(&year) {
            return Err(TimeError::range().with_message(format!("year {year} is out of range")));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::range().with_message(format!("month {month} is out of range")));
        }
        if day < 1 || day > utils::days_in_month(year, month) {
            return Err(TimeError::range().with_message(format!(
                "day {day} is out of range for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl Writeable for Date {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(10)
    }
}

impl_display_with_writeable!(Date);

impl FromStr for Date {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}
