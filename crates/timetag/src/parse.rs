//! Classification and resolution of raw `datetime` attribute values.
//!
//! The HTML `datetime` attribute admits several shapes: a full date, a
//! year-month, a week-date (`2021-W01`), a bare time of day, and a duration
//! (`PT1H`). [`parse_datetime`] classifies a raw value by shape — first
//! match wins — and resolves every point-in-time shape to an absolute
//! instant. Durations classify to [`Resolution::NotAPointInTime`]; the
//! caller decides what to do with them.
//!
//! The "now" anchor is always passed in by the caller. It supplies the
//! calendar date for time-only values and the year for month-day values.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{Result, TimetagError};
use crate::text::count_char;
use crate::week::week_monday;

/// The outcome of classifying a `datetime` attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// The value names an elapsed span (a `PT…` duration), not a point
    /// in time.
    NotAPointInTime,
    /// The value resolves to this absolute instant.
    Instant(DateTime<Utc>),
}

/// Classify a raw `datetime` attribute value and resolve it to an instant.
///
/// Shapes are recognized in order, first match wins:
///
/// 1. Starts with `PT` → a duration → [`Resolution::NotAPointInTime`].
/// 2. No hyphen but contains `:` → a time of day, attached to `now`'s
///    calendar date (`14:30` or `14:30:00`).
/// 3. Exactly one hyphen:
///    - contains `-W` past the first character → a week-date (`2021-W01`),
///      resolved to its Monday via [`week_monday`];
///    - starts with `20` → a year-month (`2021-03`), resolved to the first
///      of that month;
///    - otherwise → a month-day (`03-14`), with `now`'s year prepended.
/// 4. Anything else → a generic date/datetime parse (RFC 3339, then
///    `YYYY-MM-DDTHH:MM[:SS]` taken as UTC, then a plain `YYYY-MM-DD`).
///
/// All resolved dates without an explicit time of day land on midnight UTC.
///
/// # Errors
///
/// Returns [`TimetagError::InvalidArgument`] when a week-date's year or week
/// number is not an integer, and [`TimetagError::InvalidDatetime`] when any
/// other recognized shape carries an impossible value (month 13, hour 25)
/// or the generic parse of step 4 fails.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timetag::{parse_datetime, Resolution};
///
/// let now = Utc.with_ymd_and_hms(2021, 6, 1, 9, 0, 0).unwrap();
///
/// let week = parse_datetime("2021-W01", now).unwrap();
/// assert_eq!(
///     week,
///     Resolution::Instant(Utc.with_ymd_and_hms(2020, 12, 28, 0, 0, 0).unwrap())
/// );
///
/// assert_eq!(parse_datetime("PT1H", now).unwrap(), Resolution::NotAPointInTime);
/// ```
pub fn parse_datetime(value: &str, now: DateTime<Utc>) -> Result<Resolution> {
    if value.starts_with("PT") {
        return Ok(Resolution::NotAPointInTime);
    }

    let hyphens = count_char(value, "-");

    if hyphens == 0 && value.contains(':') {
        return parse_time_only(value, now).map(Resolution::Instant);
    }

    if hyphens == 1 {
        let instant = match value.find("-W") {
            Some(idx) if idx > 0 => parse_week_date(value, idx)?,
            _ if value.starts_with("20") => parse_year_month(value)?,
            _ => parse_month_day(value, now)?,
        };
        return Ok(Resolution::Instant(instant));
    }

    parse_generic(value).map(Resolution::Instant)
}

/// Render an instant in the `YYYY-MM-DDTHH:mm:ss.sssZ` shape used for
/// element annotations.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timetag::render_instant;
///
/// let instant = Utc.with_ymd_and_hms(2021, 3, 3, 14, 30, 0).unwrap();
/// assert_eq!(render_instant(instant), "2021-03-03T14:30:00.000Z");
/// ```
pub fn render_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Shape parsers ───────────────────────────────────────────────────────────

/// A bare time of day, attached to the anchor's calendar date.
fn parse_time_only(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|e| TimetagError::InvalidDatetime(format!("'{value}': {e}")))?;
    Ok(now.date_naive().and_time(time).and_utc())
}

/// A `YYYY-Www` week-date. `idx` is the byte position of the `-W` marker.
fn parse_week_date(value: &str, idx: usize) -> Result<DateTime<Utc>> {
    let year: i32 = value[..idx]
        .parse()
        .map_err(|_| TimetagError::InvalidArgument(format!("'{value}': year must be a number")))?;
    let week: i64 = value[idx + 2..].parse().map_err(|_| {
        TimetagError::InvalidArgument(format!("'{value}': week number must be a number"))
    })?;
    Ok(midnight(week_monday(year, week)?))
}

/// A `YYYY-MM` year-month, resolved to the first of the month.
fn parse_year_month(value: &str) -> Result<DateTime<Utc>> {
    let parsed = value.split_once('-').and_then(|(y, m)| {
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)
    });
    let date =
        parsed.ok_or_else(|| TimetagError::InvalidDatetime(format!("'{value}': not a year-month")))?;
    Ok(midnight(date))
}

/// An `MM-DD` month-day, with the anchor's year prepended.
fn parse_month_day(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let parsed = value.split_once('-').and_then(|(m, d)| {
        let month: u32 = m.parse().ok()?;
        let day: u32 = d.parse().ok()?;
        NaiveDate::from_ymd_opt(now.year(), month, day)
    });
    let date =
        parsed.ok_or_else(|| TimetagError::InvalidDatetime(format!("'{value}': not a month-day")))?;
    Ok(midnight(date))
}

/// Best-effort parse for everything the shape classifier did not claim.
fn parse_generic(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(midnight(date));
    }
    Err(TimetagError::InvalidDatetime(format!(
        "'{value}': unrecognized date/time shape"
    )))
}

/// Midnight UTC on the given date.
fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

// ── Tests ───────────────────────────────────────────────────────────────────
