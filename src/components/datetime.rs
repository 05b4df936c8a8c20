//! This module implements `DateTime`, a combined date and time of day.

use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::parsers::parse_datetime;
use crate::{Date, Time, TimeError, TimeResult};

/// A date and time of day with UTC timezone.
///
/// The canonical wire form is the fixed-width `YYYY-MM-DDTHH:MM:SSZ` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Creates a new `DateTime`, validating every field.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<Self> {
        let date = Date::try_new(year, month, day)?;
        let time = Time::try_new(hour, minute, second)?;
        Ok(Self { date, time })
    }

    pub(crate) const fn from_parts(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Returns the date component.
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the time-of-day component.
    pub const fn time(&self) -> Time {
        self.time
    }
}

impl From<(Date, Time)> for DateTime {
    fn from((date, time): (Date, Time)) -> Self {
        Self { date, time }
    }
}

impl Writeable for DateTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)?;
        sink.write_char('Z')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(20)
    }
}

impl_display_with_writeable!(DateTime);

impl FromStr for DateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_datetime(s)
    }
}
