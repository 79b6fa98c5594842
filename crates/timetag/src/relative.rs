//! Day counting and coarse relative-day phrasing.
//!
//! [`days_between`] measures whole calendar days between two instants,
//! midnight to midnight: time of day is stripped from both endpoints before
//! subtracting, so 23:59 on one day to 00:01 on the next still counts as
//! one day. [`describe_days`] turns such a count into a coarse phrase
//! ("today", "3 days", "2 weeks") suitable for tooltips.

use chrono::{DateTime, Utc};

/// Whole calendar days from `from` to `to`, midnight to midnight.
///
/// Negative when `to` is before `from`. Time of day on either endpoint is
/// ignored.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timetag::days_between;
///
/// let a = Utc.with_ymd_and_hms(2021, 3, 3, 23, 59, 0).unwrap();
/// let b = Utc.with_ymd_and_hms(2021, 3, 4, 0, 1, 0).unwrap();
/// assert_eq!(days_between(a, b), 1);
/// assert_eq!(days_between(b, a), -1);
/// ```
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// Describe a signed day count as a coarse human phrase.
///
/// The sign is ignored: three days ago and three days from now both read
/// `"3 days"`. Bands, with floor division on the larger units:
///
/// | days        | phrase          |
/// |-------------|-----------------|
/// | 0           | `today`         |
/// | 1           | `1 day`         |
/// | 2..7        | `{n} days`      |
/// | 7..14       | `1 week`        |
/// | 14..30      | `{n/7} weeks`   |
/// | 30..60      | `1 month`       |
/// | 60..365     | `{n/30} months` |
/// | 365..730    | `1 year`        |
/// | 730..       | `{n/365} years` |
///
/// # Examples
///
/// ```
/// use timetag::describe_days;
///
/// assert_eq!(describe_days(0), "today");
/// assert_eq!(describe_days(-16), "2 weeks");
/// assert_eq!(describe_days(400), "1 year");
/// ```
pub fn describe_days(day_count: i64) -> String {
    let n = day_count.unsigned_abs();
    match n {
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        2..=6 => format!("{n} days"),
        7..=13 => format!("{} week", n / 7),
        14..=29 => format!("{} weeks", n / 7),
        30..=59 => format!("{} month", n / 30),
        60..=364 => format!("{} months", n / 30),
        365..=729 => format!("{} year", n / 365),
        _ => format!("{} years", n / 365),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 3, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_days_between_same_month() {
        for i in 0..29 {
            let to = start() + Duration::days(i);
            assert_eq!(days_between(start(), to), i);
        }
    }

    #[test]
    fn test_days_between_next_month() {
        // March has 31 days, so March 3 → April 3 + i is 31 + i.
        let april = Utc.with_ymd_and_hms(2021, 4, 3, 0, 0, 0).unwrap();
        for i in 0..29 {
            assert_eq!(days_between(start(), april + Duration::days(i)), 31 + i);
        }
    }

    #[test]
    fn test_days_between_two_months_out() {
        // March (31) + April (30) = 61.
        let may = Utc.with_ymd_and_hms(2021, 5, 3, 0, 0, 0).unwrap();
        for i in 0..29 {
            assert_eq!(days_between(start(), may + Duration::days(i)), 61 + i);
        }
    }

    #[test]
    fn test_days_between_full_year() {
        let next_year = Utc.with_ymd_and_hms(2022, 3, 3, 0, 0, 0).unwrap();
        assert_eq!(days_between(start(), next_year), 365);
    }

    #[test]
    fn test_days_between_strips_time_of_day() {
        let late = Utc.with_ymd_and_hms(2021, 3, 3, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2021, 3, 4, 0, 0, 1).unwrap();
        assert_eq!(days_between(late, early), 1);
    }

    #[test]
    fn test_describe_today_and_single_day() {
        assert_eq!(describe_days(0), "today");
        assert_eq!(describe_days(1), "1 day");
        assert_eq!(describe_days(-1), "1 day");
    }

    #[test]
    fn test_describe_days_band() {
        for i in 2..7 {
            assert_eq!(describe_days(i), format!("{i} days"));
            assert_eq!(describe_days(-i), format!("{i} days"));
        }
    }

    #[test]
    fn test_describe_single_week_band() {
        for i in 7..14 {
            assert_eq!(describe_days(i), "1 week");
        }
    }

    #[test]
    fn test_describe_weeks_band() {
        assert_eq!(describe_days(14), "2 weeks");
        assert_eq!(describe_days(20), "2 weeks");
        assert_eq!(describe_days(29), "4 weeks");
    }

    #[test]
    fn test_describe_month_bands() {
        for i in 30..60 {
            assert_eq!(describe_days(i), "1 month");
        }
        assert_eq!(describe_days(60), "2 months");
        assert_eq!(describe_days(364), "12 months");
    }

    #[test]
    fn test_describe_year_bands() {
        for i in 365..730 {
            assert_eq!(describe_days(i), "1 year");
        }
        for i in 730..1000 {
            assert_eq!(describe_days(i), format!("{} years", i / 365));
        }
    }

    proptest! {
        #[test]
        fn prop_describe_ignores_sign(n in 0i64..100_000) {
            prop_assert_eq!(describe_days(n), describe_days(-n));
        }

        #[test]
        fn prop_describe_is_never_empty(n in i64::MIN..=i64::MAX) {
            prop_assert!(!describe_days(n).is_empty());
        }
    }
}
