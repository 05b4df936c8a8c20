//! Serde support: every value type crosses the wire as its canonical string.
//!
//! Serialization writes the `Display` form; deserialization expects a string
//! and hands it to the type's parser, surfacing the parser's error text
//! verbatim through the deserializer's error type.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Date, DateTime, Duration, Interval, Time, TimeError, TimeZone, Weekday};

struct TextVisitor<T> {
    expecting: &'static str,
    _ty: PhantomData<T>,
}

impl<'de, T> de::Visitor<'de> for TextVisitor<T>
where
    T: FromStr<Err = TimeError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        value.parse::<T>().map_err(|err| {
            #[cfg(feature = "log")]
            log::debug!("rejected wire value {value:?}: {err}");
            E::custom(err)
        })
    }
}

macro_rules! impl_wire_text {
    ($ty:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(TextVisitor {
                    expecting: $expecting,
                    _ty: PhantomData,
                })
            }
        }
    };
}

impl_wire_text!(Date, "a date string");
impl_wire_text!(Time, "a time string");
impl_wire_text!(DateTime, "a date-time string");
impl_wire_text!(Duration, "a duration string");
impl_wire_text!(Interval, "an interval string");
impl_wire_text!(Weekday, "a weekday name");
impl_wire_text!(TimeZone, "a timezone identifier");

#[cfg(test)]
mod tests {
    use crate::{Date, DateTime, Duration, Interval, Time, TimeZone, Weekday};
    use alloc::string::{String, ToString};

    fn to_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn duration_json() {
        assert_eq!(to_json(&Duration::new(0, 0, 0)), r#""0h0m0s""#);
        assert_eq!(to_json(&Duration::new(0, 2, 3)), r#""2m3s""#);
        assert_eq!(to_json(&Duration::new(1, 2, 3)), r#""1h2m3s""#);
        assert_eq!(to_json(&Duration::new(-1, 2, 3)), r#""-1h2m3s""#);

        let d: Duration = serde_json::from_str(r#""-1h2m3s""#).unwrap();
        assert_eq!(d, Duration::new(-1, 2, 3));
        let d: Duration = serde_json::from_str(r#""0""#).unwrap();
        assert!(d.is_zero());
    }

    #[test]
    fn duration_json_errors_surface_parser_text() {
        let err = serde_json::from_str::<Duration>(r#""1""#).unwrap_err();
        assert!(err.to_string().contains("missing unit in duration"));
        let err = serde_json::from_str::<Duration>(r#""1hh10ns""#).unwrap_err();
        assert!(err.to_string().contains("unknown unit \"hh\""));
        let err = serde_json::from_str::<Duration>(r#""1h1h""#).unwrap_err();
        assert!(err.to_string().contains("unit \"h\" repeated"));
        let err = serde_json::from_str::<Duration>(r#""1s1m""#).unwrap_err();
        assert!(err.to_string().contains("must be in the order of h, m, s"));
        // Not a string at all.
        assert!(serde_json::from_str::<Duration>("0").is_err());
    }

    #[test]
    fn interval_json() {
        assert_eq!(to_json(&Interval::new(1, 2, 3, 4, 5, 6)), r#""1y2mo3d4h5m6s""#);
        assert_eq!(to_json(&Interval::from_time(4, 5, 6)), r#""4h5m6s""#);
        assert_eq!(to_json(&Interval::default()), r#""0""#);

        let interval: Interval = serde_json::from_str(r#""1y2mo3d4h5m6s""#).unwrap();
        assert_eq!(interval, Interval::new(1, 2, 3, 4, 5, 6));

        let err = serde_json::from_str::<Interval>(r#""1sm""#).unwrap_err();
        assert!(err.to_string().contains("unknown unit \"sm\""));
        let err = serde_json::from_str::<Interval>(r#""""#).unwrap_err();
        assert!(err.to_string().contains("invalid interval"));
        assert!(serde_json::from_str::<Interval>("1").is_err());
    }

    #[test]
    fn date_time_json() {
        let date = Date::try_new(2021, 1, 1).unwrap();
        assert_eq!(to_json(&date), r#""2021-01-01""#);
        assert_eq!(serde_json::from_str::<Date>(r#""2021-01-01""#).unwrap(), date);
        assert!(serde_json::from_str::<Date>(r#""2021-01""#).is_err());

        let time = Time::try_new(1, 2, 3).unwrap();
        assert_eq!(to_json(&time), r#""01:02:03""#);
        assert_eq!(serde_json::from_str::<Time>(r#""01:02:03""#).unwrap(), time);
        assert!(serde_json::from_str::<Time>(r#""01:02""#).is_err());

        let dt = DateTime::try_new(2021, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(to_json(&dt), r#""2021-12-31T23:59:59Z""#);
        assert_eq!(
            serde_json::from_str::<DateTime>(r#""2021-12-31T23:59:59Z""#).unwrap(),
            dt
        );
        assert!(serde_json::from_str::<DateTime>(r#""2021-01-01T00:00""#).is_err());
    }

    #[test]
    fn weekday_json() {
        assert_eq!(to_json(&Weekday::Wednesday), r#""WEDNESDAY""#);
        assert_eq!(
            serde_json::from_str::<Weekday>(r#""WEDNESDAY""#).unwrap(),
            Weekday::Wednesday
        );
        assert!(serde_json::from_str::<Weekday>(r#""SUNDAY1""#).is_err());
        assert!(serde_json::from_str::<Weekday>("0").is_err());
    }

    #[test]
    fn timezone_json() {
        let tz = TimeZone::try_new("America/New_York").unwrap();
        assert_eq!(to_json(&tz), r#""America/New_York""#);
        assert_eq!(
            serde_json::from_str::<TimeZone>(r#""America/New_York""#).unwrap(),
            tz
        );
        for input in [r#""""#, r#""Local""#, "1"] {
            assert!(serde_json::from_str::<TimeZone>(input).is_err(), "input {input}");
        }
    }
}
