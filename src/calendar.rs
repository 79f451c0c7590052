use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MONTH_END_DAY_COUNTS, SRI_LANKA_UTC_OFFSET_SECS,
};
use crate::prelude::*;
use chrono::{Datelike, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A plain calendar date.
///
/// Ordering is chronological (year, then month, then day), which is what the
/// age computation relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct Date {
    pub year: u16,
    /// 1-based month (1 = January)
    pub month: u8,
    /// 1-based day of month
    pub day: u8,
}

impl Date {
    /// Creates a date from its components without validation.
    /// Callers are responsible for passing a real calendar date.
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Returns `true` if `year` is a Gregorian leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of days in `year`: 366 for leap years, 365 otherwise.
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// The current calendar date as observed in Sri Lanka (UTC+05:30),
/// independent of the process-local timezone.
///
/// This is the only time-dependent primitive in the crate; everything else
/// takes a [`Date`] parameter so tests can pin the clock.
pub fn today() -> Date {
    let colombo_now = Utc::now() + TimeDelta::seconds(i64::from(SRI_LANKA_UTC_OFFSET_SECS));
    Date {
        year: colombo_now.year() as u16,
        month: colombo_now.month() as u8,
        day: colombo_now.day() as u8,
    }
}

/// Cumulative day count at the end of each month of `year`.
fn month_end_day_counts(year: u16) -> [u16; 12] {
    let mut totals = MONTH_END_DAY_COUNTS;
    if is_leap_year(year) {
        for total in totals.iter_mut().skip(1) {
            *total += 1;
        }
    }
    totals
}

/// Converts a 1-based day-of-year into a calendar date within `year`.
///
/// `day_of_year` must already be in `1..=days_in_year(year)`.
pub(crate) fn date_from_day_of_year(year: u16, day_of_year: u16) -> Date {
    let mut prev = 0;

    for (index, total) in month_end_day_counts(year).into_iter().enumerate() {
        if day_of_year <= total {
            return Date {
                year,
                month: index as u8 + 1,
                day: (day_of_year - prev) as u8,
            };
        }
        prev = total;
    }

    Date {
        year,
        month: 12,
        day: 31,
    }
}

/// Whole years elapsed between `birthday` and `today`.
///
/// Counts `today.year - birthday.year`, minus one when the birthday has not
/// yet been reached this year. A birthday falling on `today` counts as
/// already reached.
pub(crate) fn age_on(birthday: Date, today: Date) -> u16 {
    let mut age = i32::from(today.year) - i32::from(birthday.year);
    if (today.month, today.day) < (birthday.month, birthday.day) {
        age -= 1;
    }
    age.max(0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1996,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1995,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1995), 365);
        assert_eq!(days_in_year(1996), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_date_from_day_of_year_common_year() {
        assert_eq!(date_from_day_of_year(1995, 1), Date::new(1995, 1, 1));
        assert_eq!(date_from_day_of_year(1995, 31), Date::new(1995, 1, 31));
        assert_eq!(date_from_day_of_year(1995, 32), Date::new(1995, 2, 1));
        assert_eq!(date_from_day_of_year(1995, 59), Date::new(1995, 2, 28));
        assert_eq!(date_from_day_of_year(1995, 60), Date::new(1995, 3, 1));
        assert_eq!(date_from_day_of_year(1995, 151), Date::new(1995, 5, 31));
        assert_eq!(date_from_day_of_year(1995, 365), Date::new(1995, 12, 31));
    }

    #[test]
    fn test_date_from_day_of_year_leap_year() {
        assert_eq!(date_from_day_of_year(1996, 59), Date::new(1996, 2, 28));
        assert_eq!(date_from_day_of_year(1996, 60), Date::new(1996, 2, 29));
        assert_eq!(date_from_day_of_year(1996, 61), Date::new(1996, 3, 1));
        assert_eq!(date_from_day_of_year(1996, 152), Date::new(1996, 5, 31));
        assert_eq!(date_from_day_of_year(1996, 366), Date::new(1996, 12, 31));
    }

    #[test]
    fn test_date_from_day_of_year_every_month_end() {
        // Last day of each month in a common year maps back onto the
        // cumulative table entry for that month.
        let month_lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let mut doy = 0u16;
        for (index, len) in month_lengths.into_iter().enumerate() {
            doy += len;
            let date = date_from_day_of_year(2023, doy);
            assert_eq!(usize::from(date.month), index + 1);
            assert_eq!(u16::from(date.day), len);
        }
    }

    #[test]
    fn test_age_on_cases() {
        struct TestCase {
            birthday: Date,
            today: Date,
            age: u16,
            description: &'static str,
        }

        let cases = [
            TestCase {
                birthday: Date::new(1995, 2, 28),
                today: Date::new(2026, 2, 28),
                age: 31,
                description: "birthday is today",
            },
            TestCase {
                birthday: Date::new(1995, 2, 28),
                today: Date::new(2026, 2, 15),
                age: 30,
                description: "birthday later this month",
            },
            TestCase {
                birthday: Date::new(1995, 12, 31),
                today: Date::new(2026, 2, 28),
                age: 30,
                description: "birthday in a later month",
            },
            TestCase {
                birthday: Date::new(1995, 1, 1),
                today: Date::new(2026, 2, 28),
                age: 31,
                description: "birthday already passed",
            },
        ];

        for case in &cases {
            assert_eq!(
                age_on(case.birthday, case.today),
                case.age,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_date_display() {
        assert_eq!(Date::new(1995, 5, 31).to_string(), "1995-05-31");
        assert_eq!(Date::new(1974, 7, 11).to_string(), "1974-07-11");
    }

    #[test]
    fn test_date_ordering() {
        assert!(Date::new(1995, 5, 31) < Date::new(1995, 6, 1));
        assert!(Date::new(1995, 5, 31) < Date::new(1996, 1, 1));
        assert!(Date::new(1995, 5, 30) < Date::new(1995, 5, 31));
    }

    #[test]
    fn test_today_returns_plausible_date() {
        let now = today();
        assert!(now.year >= 2025);
        assert!((1..=12).contains(&now.month));
        assert!((1..=31).contains(&now.day));
    }

    #[test]
    fn test_date_serde() {
        let date = Date::new(1995, 5, 31);
        let json = serde_json::to_string(&date).expect("failed to serialize date");
        assert_eq!(json, r#"{"year":1995,"month":5,"day":31}"#);

        let parsed: Date = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(date, parsed);
    }
}
