//! Parsers for the canonical wire text formats.
//!
//! [`parse_duration`] and [`parse_interval`] implement a strict grammar for
//! unit-suffixed quantities:
//!
//! - units must appear in a fixed descending order (`h`, `m`, `s` for
//!   durations; `y`, `mo`, `d`, `h`, `m`, `s` for intervals),
//! - each unit may appear at most once,
//! - only whole magnitudes are accepted (no fractions),
//! - the bare string `"0"` is the only input accepted without a unit suffix.
//!
//! Durations accept an optional leading `+` or `-`; intervals accept no sign.
//! Magnitudes are rejected before they can wrap 64-bit arithmetic.
//!
//! Both functions are pure: all parse state (the seen-units record and the
//! order watermark) is local to one call, and the unit tables are read-only
//! constants, so concurrent calls are independent.

use alloc::format;

use crate::components::{Date, DateTime, Duration, Interval, Time};
use crate::{Sign, TimeError, TimeResult};

pub(crate) const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

// Magnitudes above this ceiling are rejected. 2^63 rather than u64::MAX
// leaves headroom for a sign.
const MAGNITUDE_CEILING: u64 = 1 << 63;

/// Duration units with their nanosecond multipliers, in the required order.
/// A unit's rank is its index in the table.
const DURATION_UNITS: [(&str, u64); 3] = [
    ("h", NANOS_PER_HOUR),
    ("m", NANOS_PER_MINUTE),
    ("s", NANOS_PER_SECOND),
];

/// Interval units in the required order; a unit's rank is its index.
const INTERVAL_UNITS: [&str; 6] = ["y", "mo", "d", "h", "m", "s"];

/// Parses a duration string such as `"300s"`, `"-1h"` or `"2h45m"`.
///
/// A duration string is a possibly signed sequence of decimal numbers, each
/// with a unit suffix from `h`, `m`, `s`. Unlike general-purpose duration
/// parsers this grammar disallows:
///
/// - the `ns`, `us`, `ms` and `d` units,
/// - fractions of a unit,
/// - repeating a unit,
/// - units out of order.
///
/// Field values are stored verbatim; `"90m"` parses to ninety minutes rather
/// than one hour and thirty minutes.
pub fn parse_duration(s: &str) -> TimeResult<Duration> {
    // [-+]?([0-9]*[a-z]+)+
    let orig = s;
    let mut s = s;
    let mut sign = Sign::Positive;

    // Consume [-+]?
    if let Some(&c) = s.as_bytes().first() {
        if c == b'-' || c == b'+' {
            if c == b'-' {
                sign = Sign::Negative;
            }
            s = &s[1..];
        }
    }

    if s.is_empty() {
        return Err(invalid_duration(orig));
    }

    // Special case: if all that is left is "0", this is zero.
    if s == "0" {
        return Ok(Duration::from_parts(sign, 0, 0, 0));
    }

    let mut seen = [false; DURATION_UNITS.len()];
    let mut max_rank = None;
    let mut fields = [0i64; DURATION_UNITS.len()];
    let mut total: u64 = 0;

    while !s.is_empty() {
        // The next character must be [0-9].
        if !s.as_bytes()[0].is_ascii_digit() {
            return Err(invalid_duration(orig));
        }
        // Consume [0-9]*.
        let (value, rest) = leading_int(s).ok_or_else(|| invalid_duration(orig))?;
        s = rest;

        // Consume the unit suffix.
        let (unit, rest) = split_unit(s);
        if unit.is_empty() {
            return Err(TimeError::missing_unit()
                .with_message(format!("missing unit in duration {orig:?}")));
        }
        s = rest;

        let Some(rank) = DURATION_UNITS.iter().position(|(label, _)| *label == unit) else {
            return Err(TimeError::unknown_unit()
                .with_message(format!("unknown unit {unit:?} in duration {orig:?}")));
        };
        if seen[rank] {
            return Err(TimeError::repeated_unit()
                .with_message(format!("unit {unit:?} repeated in duration {orig:?}")));
        }
        if max_rank.is_some_and(|prev| rank < prev) {
            return Err(TimeError::unordered_unit().with_message(format!(
                "unit {unit:?} must be in the order of h, m, s in duration {orig:?}"
            )));
        }
        max_rank = Some(rank);
        seen[rank] = true;

        let multiplier = DURATION_UNITS[rank].1;
        if value > MAGNITUDE_CEILING / multiplier {
            return Err(duration_overflow(orig));
        }
        fields[rank] = value as i64;

        total = total
            .checked_add(value * multiplier)
            .ok_or_else(|| duration_overflow(orig))?;
        if total > MAGNITUDE_CEILING {
            return Err(duration_overflow(orig));
        }
    }

    // Negative totals are exempt from the final ceiling test.
    if sign == Sign::Positive && total > MAGNITUDE_CEILING - 1 {
        return Err(duration_overflow(orig));
    }
    Ok(Duration::from_parts(sign, fields[0], fields[1], fields[2]))
}

/// Parses an interval string such as `"1y"`, `"1mo"` or `"2h45m"`.
///
/// An interval string is an unsigned sequence of decimal numbers, each with a
/// unit suffix from `y`, `mo`, `d`, `h`, `m`, `s`. The same restrictions as
/// [`parse_duration`] apply: whole magnitudes only, each unit at most once,
/// units in order. Fields are raw counts and are not carried against each
/// other; `"14mo"` stays fourteen months.
pub fn parse_interval(s: &str) -> TimeResult<Interval> {
    // ([0-9]*[a-z]+)+
    let orig = s;
    let mut s = s;

    // Special case: if all that is left is "0", this is zero.
    if s == "0" {
        return Ok(Interval::default());
    }
    if s.is_empty() {
        return Err(invalid_interval(orig));
    }

    let mut seen = [false; INTERVAL_UNITS.len()];
    let mut max_rank = None;
    let mut fields = [0i64; INTERVAL_UNITS.len()];

    while !s.is_empty() {
        // The next character must be [0-9].
        if !s.as_bytes()[0].is_ascii_digit() {
            return Err(invalid_interval(orig));
        }
        // Consume [0-9]*.
        let (value, rest) = leading_int(s).ok_or_else(|| invalid_interval(orig))?;
        s = rest;

        // Consume the unit suffix.
        let (unit, rest) = split_unit(s);
        if unit.is_empty() {
            return Err(TimeError::missing_unit()
                .with_message(format!("missing unit in interval {orig:?}")));
        }
        s = rest;

        let Some(rank) = INTERVAL_UNITS.iter().position(|label| *label == unit) else {
            return Err(TimeError::unknown_unit()
                .with_message(format!("unknown unit {unit:?} in interval {orig:?}")));
        };
        if seen[rank] {
            return Err(TimeError::repeated_unit()
                .with_message(format!("unit {unit:?} repeated in interval {orig:?}")));
        }
        if max_rank.is_some_and(|prev| rank < prev) {
            return Err(TimeError::unordered_unit().with_message(format!(
                "unit {unit:?} must be in the order of y, mo, d, h, m, s in interval {orig:?}"
            )));
        }
        max_rank = Some(rank);
        seen[rank] = true;

        if value > i64::MAX as u64 {
            return Err(TimeError::overflow()
                .with_message(format!("interval {orig:?} is out of range")));
        }
        fields[rank] = value as i64;
    }

    Ok(Interval::new(
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
    ))
}

/// Consumes the leading `[0-9]*` run from `s`, returning the accumulated
/// magnitude and the unconsumed remainder.
///
/// Returns `None` when the magnitude would pass the 2^63 ceiling. The check
/// runs before each multiply-by-ten step and again after the add, so the
/// value can never wrap.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        if value > MAGNITUDE_CEILING / 10 {
            return None;
        }
        value = value * 10 + u64::from(bytes[i] - b'0');
        if value > MAGNITUDE_CEILING {
            return None;
        }
        i += 1;
    }
    Some((value, &s[i..]))
}

/// Splits the leading run of non-digit characters from `s`.
fn split_unit(s: &str) -> (&str, &str) {
    let end = s
        .as_bytes()
        .iter()
        .position(|b| b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

fn invalid_duration(orig: &str) -> TimeError {
    TimeError::malformed().with_message(format!("invalid duration {orig:?}"))
}

fn duration_overflow(orig: &str) -> TimeError {
    TimeError::overflow().with_message(format!("duration {orig:?} is out of range"))
}

fn invalid_interval(orig: &str) -> TimeError {
    TimeError::malformed().with_message(format!("invalid interval {orig:?}"))
}

// ==== Fixed-layout date and clock parsing ====

/// Parses a date in the canonical `YYYY-MM-DD` layout.
pub(crate) fn parse_date(s: &str) -> TimeResult<Date> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return Err(invalid_date(s));
    }
    let year = fixed_digits(&b[0..4]).ok_or_else(|| invalid_date(s))?;
    let month = fixed_digits(&b[5..7]).ok_or_else(|| invalid_date(s))?;
    let day = fixed_digits(&b[8..10]).ok_or_else(|| invalid_date(s))?;
    Date::try_new(year as i32, month as u8, day as u8)
}

/// Parses a time of day in the canonical `HH:MM:SS` layout.
pub(crate) fn parse_time(s: &str) -> TimeResult<Time> {
    let b = s.as_bytes();
    if b.len() != 8 || b[2] != b':' || b[5] != b':' {
        return Err(invalid_time(s));
    }
    let hour = fixed_digits(&b[0..2]).ok_or_else(|| invalid_time(s))?;
    let minute = fixed_digits(&b[3..5]).ok_or_else(|| invalid_time(s))?;
    let second = fixed_digits(&b[6..8]).ok_or_else(|| invalid_time(s))?;
    Time::try_new(hour as u8, minute as u8, second as u8)
}

/// Parses a date-time in the canonical `YYYY-MM-DDTHH:MM:SSZ` layout.
pub(crate) fn parse_datetime(s: &str) -> TimeResult<DateTime> {
    let b = s.as_bytes();
    if b.len() != 20 || b[10] != b'T' || b[19] != b'Z' {
        return Err(TimeError::malformed().with_message(format!("invalid datetime {s:?}")));
    }
    let date = parse_date(&s[..10])?;
    let time = parse_time(&s[11..19])?;
    Ok(DateTime::from_parts(date, time))
}

/// Reads an exact-width all-digit field.
fn fixed_digits(bytes: &[u8]) -> Option<u32> {
    let mut value = 0u32;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Some(value)
}

fn invalid_date(s: &str) -> TimeError {
    TimeError::malformed().with_message(format!("invalid date {s:?}"))
}

fn invalid_time(s: &str) -> TimeError {
    TimeError::malformed().with_message(format!("invalid time {s:?}"))
}
