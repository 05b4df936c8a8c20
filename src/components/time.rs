//! This module implements `Time`, a wall-clock time of day.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::parsers::parse_time;
use crate::{TimeError, TimeResult};

/// A time of day (hour, minute, second) with UTC timezone.
///
/// The canonical wire form is the fixed-width `HH:MM:SS` layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// Creates a new `Time`, validating that the hour, minute and second are
    /// within their usual ranges.
    pub fn try_new(hour: u8, minute: u8, second: u8) -> TimeResult<Self> {
        if hour > 23 {
            return Err(TimeError::range().with_message(format!("hour {hour} is out of range")));
        }
        if minute > 59 {
            return Err(TimeError::range().with_message(format!("minute {minute} is out of range")));
        }
        if second > 59 {
            return Err(TimeError::range().with_message(format!("second {second} is out of range")));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0-23).
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns `true` if this is midnight.
    pub const fn is_zero(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }
}

impl Writeable for Time {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write!(sink, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(8)
    }
}

impl_display_with_writeable!(Time);

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn validation() {
        assert!(Time::try_new(0, 0, 0).is_ok());
        assert!(Time::try_new(23, 59, 59).is_ok());
        assert_eq!(Time::try_new(24, 0, 0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(Time::try_new(0, 61, 0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(Time::try_new(0, 0, 61).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn display() {
        assert_eq!(Time::try_new(0, 0, 0).unwrap().to_string(), "00:00:00");
        assert_eq!(Time::try_new(1, 2, 3).unwrap().to_string(), "01:02:03");
        assert_eq!(Time::try_new(23, 59, 59).unwrap().to_string(), "23:59:59");
    }

    #[test]
    fn ordering() {
        let midnight = Time::try_new(0, 0, 0).unwrap();
        assert!(midnight < Time::try_new(0, 0, 1).unwrap());
        assert!(midnight < Time::try_new(0, 1, 0).unwrap());
        assert!(midnight < Time::try_new(1, 0, 0).unwrap());
        assert!(Time::try_new(1, 1, 1).unwrap() > Time::try_new(1, 1, 0).unwrap());
        assert_eq!(midnight, Time::try_new(0, 0, 0).unwrap());
    }

    #[test]
    fn is_zero() {
        assert!(Time::try_new(0, 0, 0).unwrap().is_zero());
        assert!(!Time::try_new(0, 0, 1).unwrap().is_zero());
        assert!(!Time::try_new(1, 0, 0).unwrap().is_zero());
    }

    #[test]
    fn from_str_round_trip() {
        let time: Time = "01:02:03".parse().unwrap();
        assert_eq!(time, Time::try_new(1, 2, 3).unwrap());
        assert_eq!(time.to_string().parse::<Time>().unwrap(), time);
    }
}
