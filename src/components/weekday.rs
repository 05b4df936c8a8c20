//! This module implements `Weekday`, a day of the week.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::TimeError;

/// A day of the week.
///
/// The canonical wire form is the upper-case English name, `"SUNDAY"`
/// through `"SATURDAY"`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "SUNDAY",
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
        }
    }

    /// Returns the day number with Sunday as 0.
    pub const fn number_from_sunday(self) -> u8 {
        self as u8
    }
}

impl Writeable for Weekday {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.name())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.name().len())
    }
}

impl_display_with_writeable!(Weekday);

impl FromStr for Weekday {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUNDAY" => Ok(Self::Sunday),
            "MONDAY" => Ok(Self::Monday),
            "TUESDAY" => Ok(Self::Tuesday),
            "WEDNESDAY" => Ok(Self::Wednesday),
            "THURSDAY" => Ok(Self::Thursday),
            "FRIDAY" => Ok(Self::Friday),
            "SATURDAY" => Ok(Self::Saturday),
            _ => Err(TimeError::malformed()
                .with_message(format!("weekday invalid value {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    #[test]
    fn names() {
        let names = [
            "SUNDAY",
            "MONDAY",
            "TUESDAY",
            "WEDNESDAY",
            "THURSDAY",
            "FRIDAY",
            "SATURDAY",
        ];
        for (weekday, name) in ALL.iter().zip(names) {
            assert_eq!(weekday.to_string(), name);
            assert_eq!(name.parse::<Weekday>().unwrap(), *weekday);
        }
    }

    #[test]
    fn numbering() {
        assert_eq!(Weekday::Sunday.number_from_sunday(), 0);
        assert_eq!(Weekday::Saturday.number_from_sunday(), 6);
    }

    #[test]
    fn rejects_unknown_names() {
        for input in ["", "sunday", "SUNDAY1", "Sun"] {
            assert_eq!(
                input.parse::<Weekday>().unwrap_err().kind(),
                ErrorKind::Malformed,
                "input {input:?}"
            );
        }
    }
}
