//! `timewire` provides calendar and clock value types with canonical text
//! representations for serialized interchange.
//!
//! ```rust
//! use timewire::{Duration, Interval};
//!
//! let duration: Duration = "-1h30m".parse().unwrap();
//! assert_eq!(duration.hours(), -1);
//! assert_eq!(duration.minutes(), -30);
//! assert_eq!(duration.to_string(), "-1h30m");
//!
//! let interval: Interval = "2y6mo".parse().unwrap();
//! assert_eq!(interval.years(), 2);
//! assert_eq!(interval.to_string(), "2y6mo");
//! ```
//!
//! Duration and interval strings follow a strict grammar: units appear in a
//! fixed descending order, each unit at most once, and only whole magnitudes
//! are accepted. See [`parsers`] for the grammar details.
//!
//! With the `serde` feature (on by default) every type serializes as its
//! canonical string, so the values embed directly in JSON documents.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub mod error;
pub mod parsers;

mod components;
#[cfg(feature = "serde")]
mod serde;
pub(crate) mod utils;

#[doc(inline)]
pub use error::{ErrorKind, TimeError};

/// The crate-wide result type.
pub type TimeResult<T> = Result<T, TimeError>;

pub use components::{Date, DateTime, Duration, Interval, Time, TimeZone, Weekday};

/// The sign of a [`Duration`].
///
/// A duration is negative as a whole; individual fields carry no sign of
/// their own.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive = 1,
    Negative = -1,
}

impl Sign {
    /// Coerces the sign to a multiplier for signed field accessors.
    pub(crate) const fn as_multiplier(self) -> i64 {
        self as i64
    }
}
