//! This module implements `TimeZone`, a named time zone identifier.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{TimeError, TimeResult};

/// A named time zone.
///
/// Holds a syntactically valid IANA-style identifier such as `UTC` or
/// `America/New_York`. Identifiers are validated structurally only; they are
/// not resolved against a time zone database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZone {
    id: String,
}

impl TimeZone {
    /// The UTC time zone.
    pub fn utc() -> Self {
        Self {
            id: String::from("UTC"),
        }
    }

    /// Creates a `TimeZone` from an identifier.
    ///
    /// The empty identifier and `"Local"` are rejected, as is anything that
    /// is not a slash-separated sequence of IANA name components.
    pub fn try_new(id: &str) -> TimeResult<Self> {
        if id.is_empty() || id == "Local" || !is_valid_identifier(id) {
            return Err(TimeError::range().with_message(format!("timezone {id:?} is invalid")));
        }
        Ok(Self {
            id: String::from(id),
        })
    }

    /// Returns the identifier.
    pub fn identifier(&self) -> &str {
        &self.id
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

fn is_valid_identifier(id: &str) -> bool {
    id.split('/').all(is_valid_component)
}

fn is_valid_component(component: &str) -> bool {
    let mut chars = component.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_tz_leading_char(first) && chars.all(is_tz_char)
}

fn is_tz_leading_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '.' || ch == '_'
}

fn is_tz_char(ch: char) -> bool {
    is_tz_leading_char(ch) || ch.is_ascii_digit() || ch == '+' || ch == '-'
}

impl Writeable for TimeZone {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(&self.id)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.id.len())
    }
}

impl_display_with_writeable!(TimeZone);

impl FromStr for TimeZone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}
