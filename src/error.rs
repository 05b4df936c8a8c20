//! Error types for wire-format parsing and value construction.

use alloc::borrow::Cow;
use core::fmt;

/// The category of failure behind a [`TimeError`].
///
/// Kinds are distinguishable so that a serialization layer can dispatch on
/// them without inspecting message text.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value lies outside the range its field allows.
    Range,
    /// The input text does not match the grammar.
    Malformed,
    /// A digit run was not followed by a unit suffix.
    MissingUnit,
    /// A unit suffix outside the supported set.
    UnknownUnit,
    /// The same unit suffix appeared more than once.
    RepeatedUnit,
    /// A unit suffix appeared out of the required descending order.
    UnorderedUnit,
    /// A magnitude or accumulated total exceeded its ceiling.
    Overflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Range => "value out of range",
            Self::Malformed => "malformed input",
            Self::MissingUnit => "missing unit",
            Self::UnknownUnit => "unknown unit",
            Self::RepeatedUnit => "repeated unit",
            Self::UnorderedUnit => "out-of-order unit",
            Self::Overflow => "overflow",
        };
        f.write_str(s)
    }
}

/// The error type shared by all parsing and construction operations.
///
/// Every error carries a [`ErrorKind`] plus a message that preserves the
/// original input text for diagnostics. Errors are always returned to the
/// caller; the parsers never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl TimeError {
    #[inline]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(""),
        }
    }

    /// Creates a range error.
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a malformed-input error.
    pub const fn malformed() -> Self {
        Self::new(ErrorKind::Malformed)
    }

    /// Creates a missing-unit error.
    pub const fn missing_unit() -> Self {
        Self::new(ErrorKind::MissingUnit)
    }

    /// Creates an unknown-unit error.
    pub const fn unknown_unit() -> Self {
        Self::new(ErrorKind::UnknownUnit)
    }

    /// Creates a repeated-unit error.
    pub const fn repeated_unit() -> Self {
        Self::new(ErrorKind::RepeatedUnit)
    }

    /// Creates an out-of-order-unit error.
    pub const fn unordered_unit() -> Self {
        Self::new(ErrorKind::UnorderedUnit)
    }

    /// Creates an overflow error.
    pub const fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Attaches a diagnostic message to the error.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns this error's kind.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the diagnostic message, or an empty string if none was set.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl core::error::Error for TimeError {}
