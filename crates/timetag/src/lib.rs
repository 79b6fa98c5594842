//! # timetag
//!
//! Deterministic classification and annotation of HTML `<time>` element
//! `datetime` attributes.
//!
//! An HTML `datetime` attribute may carry a plain date, a year-month, a
//! week-date (`2021-W01`), a bare time of day, or a duration (`PT1H`).
//! This crate classifies such a value, resolves it to an absolute instant
//! where one exists, and annotates the host element with a normalized
//! ISO-8601 rendering (title attribute plus appended visible text).
//!
//! ## Modules
//!
//! - [`parse`] — Classify a raw `datetime` value and resolve it to an instant
//! - [`week`] — Resolve "week N of year" to its Monday
//! - [`relative`] — Day counting and coarse relative-day phrasing
//! - [`text`] — Single-character occurrence counting
//! - [`dom`] — The element capability surface the annotator consumes
//! - [`annotate`] — Walk elements and write annotations back
//! - [`error`] — Error types
//!
//! ## Design Principle
//!
//! No function in this crate reads the system clock. Wherever "now" matters,
//! the caller passes the anchor explicitly, keeping every code path
//! reproducible under test.

pub mod annotate;
pub mod dom;
pub mod error;
pub mod parse;
pub mod relative;
pub mod text;
pub mod week;

pub use annotate::{annotate_all, annotate_element};
pub use dom::{TextElement, TimeElement};
pub use error::TimetagError;
pub use parse::{parse_datetime, render_instant, Resolution};
pub use relative::{days_between, describe_days};
pub use text::count_char;
pub use week::week_monday;
