//! Walks time elements and writes annotations back to them.
//!
//! This is the only part of the crate that mutates anything. Parsing is
//! side-effect-free; every write — title attribute and appended text —
//! happens here, one element at a time. A failure on one element never
//! affects the others: malformed values are logged and skipped.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::dom::TimeElement;
use crate::parse::{parse_datetime, render_instant, Resolution};

/// Annotate a single element from its `datetime` attribute.
///
/// Resolves the attribute against the `now` anchor. When it resolves to an
/// instant, the rendering (`YYYY-MM-DDTHH:mm:ss.sssZ`) is written twice:
/// the `title` attribute is set to it unless a non-empty title already
/// exists, and `" (<rendering>)"` is appended to the visible text.
///
/// Elements are left untouched when the attribute is absent, names a
/// duration, or fails to parse. Failures are reported as `warn` events
/// rather than returned, so one bad element cannot halt a batch.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timetag::{annotate_element, TextElement, TimeElement};
///
/// let now = Utc.with_ymd_and_hms(2021, 6, 1, 9, 0, 0).unwrap();
/// let mut el = TextElement::new("March 2021").with_attribute("datetime", "2021-03");
/// annotate_element(&mut el, now);
/// assert_eq!(el.text(), "March 2021 (2021-03-01T00:00:00.000Z)");
/// assert_eq!(el.attribute("title").as_deref(), Some("2021-03-01T00:00:00.000Z"));
/// ```
pub fn annotate_element<E: TimeElement>(element: &mut E, now: DateTime<Utc>) {
    let Some(value) = element.attribute("datetime") else {
        debug!("element has no datetime attribute, skipping");
        return;
    };

    match parse_datetime(&value, now) {
        Ok(Resolution::Instant(instant)) => {
            let rendered = render_instant(instant);
            if element.attribute("title").is_none_or(|t| t.is_empty()) {
                element.set_attribute("title", &rendered);
            }
            element.append_text(&format!(" ({rendered})"));
        }
        Ok(Resolution::NotAPointInTime) => {
            debug!(%value, "datetime names a duration, leaving element as-is");
        }
        Err(err) => {
            warn!(%err, %value, "skipping element with unparseable datetime");
        }
    }
}

/// Annotate every element in a collection.
///
/// Elements are processed independently and in order; see
/// [`annotate_element`] for the per-element behavior.
pub fn annotate_all<'a, E, I>(elements: I, now: DateTime<Utc>)
where
    E: TimeElement + 'a,
    I: IntoIterator<Item = &'a mut E>,
{
    for element in elements {
        annotate_element(element, now);
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
