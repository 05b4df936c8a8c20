//! This module implements `Duration`, a signed clock-unit span.

use core::fmt;
use core::str::FromStr;
use core::time::Duration as UnsignedDuration;

use writeable::{impl_display_with_writeable, Writeable};

use crate::parsers::parse_duration;
use crate::{Sign, TimeError};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// The span between two instants, measured in hours, minutes and seconds.
///
/// Fields are raw magnitudes and are not normalized against each other: a
/// duration of ninety minutes stays ninety minutes. The sign applies to the
/// duration as a whole.
///
/// The canonical wire form writes each non-zero field in the order
/// `<h>h<m>m<s>s`, preceded by `-` when negative; the all-zero duration
/// writes as `0h0m0s` for readability even though the parser also accepts a
/// bare `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    sign: Sign,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Duration {
    /// Creates a new `Duration`.
    ///
    /// If any argument is negative the duration as a whole is negative, and
    /// every field is stored as its absolute magnitude.
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        let sign = if hours < 0 || minutes < 0 || seconds < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self {
            sign,
            hours: hours.saturating_abs(),
            minutes: minutes.saturating_abs(),
            seconds: seconds.saturating_abs(),
        }
    }

    /// Assembles a `Duration` from an explicit sign and field magnitudes.
    pub(crate) const fn from_parts(sign: Sign, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            sign,
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns the signed hours field.
    pub const fn hours(&self) -> i64 {
        self.sign.as_multiplier() * self.hours
    }

    /// Returns the signed minutes field.
    pub const fn minutes(&self) -> i64 {
        self.sign.as_multiplier() * self.minutes
    }

    /// Returns the signed seconds field.
    pub const fn seconds(&self) -> i64 {
        self.sign.as_multiplier() * self.seconds
    }

    /// Returns the sign of the duration.
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns `true` if every field is zero, regardless of sign.
    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Returns the magnitude of the duration as a [`core::time::Duration`],
    /// saturating at the representable maximum.
    ///
    /// `core`'s duration is unsigned; combine with [`Duration::sign`] to
    /// recover the direction.
    pub fn unsigned_abs(&self) -> UnsignedDuration {
        let seconds = (self.hours as u64)
            .saturating_mul(SECS_PER_HOUR)
            .saturating_add((self.minutes as u64).saturating_mul(SECS_PER_MINUTE))
            .saturating_add(self.seconds as u64);
        UnsignedDuration::from_secs(seconds)
    }
}

impl Writeable for Duration {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        // Write every unit for the all-zero duration for readability.
        if self.is_zero() {
            return sink.write_str("0h0m0s");
        }
        if matches!(self.sign, Sign::Negative) {
            sink.write_char('-')?;
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

impl_display_with_writeable!(Duration);

impl FromStr for Duration {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}
