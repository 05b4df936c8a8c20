//! This module implements `Interval`, a calendar-and-clock unit span.

use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, Writeable};

use crate::parsers::parse_interval;
use crate::TimeError;

/// The span between two instants, measured in calendar and clock units.
///
/// Each field is a raw count: fields are not carried or normalized against
/// one another, so fourteen months stays fourteen months. Intervals carry no
/// sign.
///
/// The canonical wire form writes each non-zero field in the order
/// `<y>y<mo>mo<d>d<h>h<m>m<s>s`; the all-zero interval writes as the bare
/// `0`, matching what its parser accepts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Interval {
    /// Creates a new `Interval`.
    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Creates an `Interval` with only the date component set.
    pub const fn from_date(years: i64, months: i64, days: i64) -> Self {
        Self::new(years, months, days, 0, 0, 0)
    }

    /// Creates an `Interval` with only the time component set.
    pub const fn from_time(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self::new(0, 0, 0, hours, minutes, seconds)
    }

    /// Returns the years field.
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// Returns the months field.
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// Returns the days field.
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Returns the hours field.
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Returns the minutes field.
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Returns the seconds field.
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns `true` if every field is zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }
}

impl Writeable for Interval {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.is_zero() {
            return sink.write_char('0');
        }
        if self.years != 0 {
            write!(sink, "{}y", self.years)?;
        }
        if self.months != 0 {
            write!(sink, "{}mo", self.months)?;
        }
        if self.days != 0 {
            write!(sink, "{}d", self.days)?;
        }
        if self.hours != 0 {
            write!(sink, "{}h", self.hours)?;
        }
        if self.minutes != 0 {
            write!(sink, "{}m", self.minutes)?;
        }
        if self.seconds != 0 {
            write!(sink, "{}s", self.seconds)?;
        }
        Ok(())
    }
}

impl_display_with_writeable!(Interval);

impl FromStr for Interval {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(Interval::new(0, 0, 0, 0, 0, 0).to_string(), "0");
        assert_eq!(Interval::new(1, 2, 3, 4, 5, 6).to_string(), "1y2mo3d4h5m6s");
        assert_eq!(Interval::from_time(4, 5, 6).to_string(), "4h5m6s");
        assert_eq!(Interval::from_date(4, 5, 6).to_string(), "4y5mo6d");
    }

    #[test]
    fn is_zero() {
        assert!(Interval::new(0, 0, 0, 0, 0, 0).is_zero());
        assert!(!Interval::new(0, 0, 0, 0, 0, 1).is_zero());
    }

    #[test]
    fn accessors() {
        let interval = Interval::new(1, 2, 3, 4, 5, 6);
        assert_eq!(interval.years(), 1);
        assert_eq!(interval.months(), 2);
        assert_eq!(interval.days(), 3);
        assert_eq!(interval.hours(), 4);
        assert_eq!(interval.minutes(), 5);
        assert_eq!(interval.seconds(), 6);
    }

    #[test]
    fn from_str_round_trip() {
        let interval: Interval = "1y2mo3d4h5m6s".parse().unwrap();
        assert_eq!(interval, Interval::new(1, 2, 3, 4, 5, 6));
        assert_eq!(interval.to_string().parse::<Interval>().unwrap(), interval);
    }
}
