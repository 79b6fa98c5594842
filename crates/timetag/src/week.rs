//! Week-of-year resolution.
//!
//! Resolves `(year, week_number)` to the Monday that begins that week. The
//! numbering is deliberately simpler than ISO 8601: week 1 starts on the
//! Monday on or before January 1 (there is no "week 1 contains January 4"
//! rule), and each subsequent week starts seven days later.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{Result, TimetagError};

/// Resolve a week of a year to the Monday date that begins it.
///
/// Week 1 begins on the Monday on or before January 1 of `year`. A
/// `week_number` of 0 or below also yields that Monday (clamped to
/// "week 0" rather than rejected). The result is always a Monday; as a
/// [`NaiveDate`] it carries no time of day, so it is inherently the
/// midnight of that date.
///
/// # Errors
///
/// Returns [`TimetagError::InvalidArgument`] if `year` is outside the
/// range chrono can represent, or if stepping forward by
/// `(week_number - 1)` weeks overflows the date range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timetag::week_monday;
///
/// // January 1, 1970 was a Thursday; the week containing it began
/// // on Monday, December 29, 1969.
/// let monday = week_monday(1970, 1).unwrap();
/// assert_eq!(monday, NaiveDate::from_ymd_opt(1969, 12, 29).unwrap());
/// ```
pub fn week_monday(year: i32, week_number: i64) -> Result<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| TimetagError::InvalidArgument(format!("year {year} is out of range")))?;

    // At most six steps back from January 1.
    while date.weekday() != Weekday::Mon {
        date = date.pred_opt().ok_or_else(|| {
            TimetagError::InvalidArgument(format!("year {year} has no preceding Monday"))
        })?;
    }

    if week_number > 0 {
        // Checked all the way through: the multiplication can overflow i64
        // and Duration::days panics out of bounds, so both go through the
        // fallible forms.
        date = week_number
            .checked_sub(1)
            .and_then(|w| w.checked_mul(7))
            .and_then(Duration::try_days)
            .and_then(|offset| date.checked_add_signed(offset))
            .ok_or_else(|| {
                TimetagError::InvalidArgument(format!(
                    "week {week_number} of year {year} is out of range"
                ))
            })?;
    }

    Ok(date)
}

// ── Tests ───────────────────────────────────────────────────────────────────
