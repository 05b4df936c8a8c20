//! Proleptic Gregorian calendar utilities.

/// Whether `year` is a leap year.
pub(crate) const fn in_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. `month` must already be validated
/// to the 1..=12 range.
pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + in_leap_year(year) as u8,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(in_leap_year(2020));
        assert!(in_leap_year(2000));
        assert!(in_leap_year(0));
        assert!(!in_leap_year(2021));
        assert!(!in_leap_year(1900));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2021, 1), 31);
        assert_eq!(days_in_month(2021, 4), 30);
        assert_eq!(days_in_month(2021, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
    }
}
