//! The calendar and clock value types.

mod date;
mod datetime;
mod duration;
mod interval;
mod time;
mod timezone;
mod weekday;

#[doc(inline)]
pub use date::Date;
#[doc(inline)]
pub use datetime::DateTime;
#[doc(inline)]
pub use duration::Duration;
#[doc(inline)]
pub use interval::Interval;
#[doc(inline)]
pub use time::Time;
#[doc(inline)]
pub use timezone::TimeZone;
#[doc(inline)]
pub use weekday::Weekday;
