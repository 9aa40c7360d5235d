//! Date coercion, pattern formatting, relative time, and day distance.
//!
//! Everything in this module runs over a single canonical representation:
//! `chrono::DateTime<Local>`, an unambiguous physical instant with
//! local-calendar component accessors and an epoch-millisecond value.
//! Heterogeneous date-like inputs (an instant, an ISO-ish string, a raw
//! epoch-millisecond timestamp) are normalized up front by [`coerce_date`];
//! anything that does not coerce yields "no value", never a panic or an
//! error.
//!
//! The reference instant for relative time is an explicit parameter on
//! [`time_ago_at`] so the computation stays pure and testable;
//! [`time_ago`] is the convenience wrapper that anchors it to the current
//! local time.
//!
//! # Functions
//!
//! - [`coerce_date`] — normalize a date-like input to a canonical instant
//! - [`is_valid_date`] — predicate form of the same coercion
//! - [`format_date`] — render an instant through a `YYYY-MM-DD`-style token pattern
//! - [`time_ago`] / [`time_ago_at`] — human relative-time phrase ("2 hours ago")
//! - [`days_between`] — whole-day distance between two instants

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in one day, the divisor for [`days_between`].
const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

// ── DateInput ───────────────────────────────────────────────────────────────

/// A date-like value: the input union accepted by every function in this
/// module.
///
/// Mirrors the three shapes a date arrives in from the outside world: an
/// already-constructed instant, an ISO-ish string, or a raw
/// epoch-millisecond timestamp. `From` conversions keep call sites terse
/// (`format_date("2024-03-15", "YYYY")` works directly), and the untagged
/// serde representation lets date-like fields of external JSON deserialize
/// straight into the union: strings become [`Text`](DateInput::Text)
/// (unless they are full RFC 3339 instants), numbers become
/// [`EpochMillis`](DateInput::EpochMillis), and any other JSON shape is
/// rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// An already-valid instant.
    Instant(DateTime<Local>),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// An ISO-ish date or datetime string, parsed by [`coerce_date`].
    Text(String),
}

impl From<DateTime<Local>> for DateInput {
    fn from(dt: DateTime<Local>) -> Self {
        DateInput::Instant(dt)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Instant(dt.with_timezone(&Local))
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::EpochMillis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

// ── Coercion & validation ───────────────────────────────────────────────────

/// Normalize a date-like input into a canonical local instant.
///
/// Instants pass through unchanged. Epoch milliseconds must land inside
/// chrono's representable range. Text is parsed by trying, in order:
/// RFC 3339 (`2024-03-15T14:30:45Z`), `T`-separated local datetime
/// (`2024-03-15T14:30:45`), space-separated local datetime
/// (`2024-03-15 14:30:45`), and date-only (`2024-03-15`, taken as local
/// midnight).
///
/// # Returns
///
/// The canonical instant, or `None` if the input does not describe one.
/// This function never panics.
///
/// # Examples
///
/// ```
/// use toolbelt::datetime::coerce_date;
///
/// assert!(coerce_date("2024-03-15T14:30:45").is_some());
/// assert!(coerce_date(0i64).is_some());
/// assert!(coerce_date("not a date").is_none());
/// ```
pub fn coerce_date(input: impl Into<DateInput>) -> Option<DateTime<Local>> {
    match input.into() {
        DateInput::Instant(dt) => Some(dt),
        DateInput::EpochMillis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.with_timezone(&Local)),
        DateInput::Text(text) => parse_text(&text),
    }
}

/// Whether a date-like value describes a real instant.
///
/// The predicate form of [`coerce_date`]: `true` exactly when coercion
/// would produce a value.
///
/// # Examples
///
/// ```
/// use toolbelt::datetime::is_valid_date;
///
/// assert!(is_valid_date("2024-02-29")); // leap day
/// assert!(!is_valid_date("2023-02-29"));
/// assert!(!is_valid_date(""));
/// ```
pub fn is_valid_date(input: impl Into<DateInput>) -> bool {
    coerce_date(input).is_some()
}

/// Parse an ISO-ish date or datetime string into a local instant.
fn parse_text(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(resolve_local(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(resolve_local(dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(resolve_local(date.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Pin a naive local datetime to an instant. An ambiguous or nonexistent
/// wall-clock time (a DST transition) falls back to the UTC reading.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

// ── Zero padding ────────────────────────────────────────────────────────────

/// Decimal rendering left-padded with `'0'` to at least `width` digits.
/// Values already at or beyond the width come back unpadded, never
/// truncated.
fn pad_zero(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

// ── Pattern formatter ───────────────────────────────────────────────────────

/// Format a date-like value through a token pattern.
///
/// Tokens are substituted as plain text, longest first, each pass
/// replacing every occurrence before the next token runs; characters that
/// match no token pass through verbatim as literal separators. Because
/// the substituted values are all digits and the tokens are all letters,
/// no pass can re-read another's output.
///
/// | token | meaning |
/// |---|---|
/// | `YYYY` | full year |
/// | `YY` | last two digits of the year |
/// | `MM` / `M` | month 01-12 / 1-12 |
/// | `DD` / `D` | day 01-31 / 1-31 |
/// | `HH` / `H` | hour 00-23 / 0-23 |
/// | `mm` / `m` | minute 00-59 / 0-59 |
/// | `ss` / `s` | second 00-59 / 0-59 |
///
/// Components are read from the instant's local calendar.
///
/// # Returns
///
/// The rendered string, or `None` if the input does not coerce to a real
/// instant.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use toolbelt::datetime::format_date;
///
/// let dt = Local.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap();
/// assert_eq!(format_date(dt, "YYYY-MM-DD").unwrap(), "2024-03-15");
/// assert_eq!(format_date(dt, "HH:mm:ss").unwrap(), "14:30:45");
/// assert_eq!(format_date("junk", "YYYY"), None);
/// ```
pub fn format_date(date: impl Into<DateInput>, pattern: &str) -> Option<String> {
    let dt = coerce_date(date)?;

    let year = dt.year().to_string();
    let year_last_two = if year.len() > 2 {
        year[year.len() - 2..].to_string()
    } else {
        year.clone()
    };

    let substitutions = [
        ("YYYY", year),
        ("YY", year_last_two),
        ("MM", pad_zero(dt.month(), 2)),
        ("M", dt.month().to_string()),
        ("DD", pad_zero(dt.day(), 2)),
        ("D", dt.day().to_string()),
        ("HH", pad_zero(dt.hour(), 2)),
        ("H", dt.hour().to_string()),
        ("mm", pad_zero(dt.minute(), 2)),
        ("m", dt.minute().to_string()),
        ("ss", pad_zero(dt.second(), 2)),
        ("s", dt.second().to_string()),
    ];

    let mut rendered = pattern.to_string();
    for (token, value) in substitutions {
        rendered = rendered.replace(token, &value);
    }
    Some(rendered)
}

// ── Relative time ───────────────────────────────────────────────────────────

/// Render a date-like value as a phrase relative to the current local
/// time.
///
/// Equivalent to [`time_ago_at`] anchored at `Local::now()`; see that
/// function for the full contract.
///
/// # Returns
///
/// `"just now"`, `"<n> <unit> ago"`, or `"in <n> <unit>"`; `None` if the
/// input does not coerce to a real instant.
pub fn time_ago(date: impl Into<DateInput>) -> Option<String> {
    time_ago_at(date, Local::now())
}

/// Render a date-like value as a phrase relative to an explicit reference
/// instant.
///
/// The signed millisecond difference from the instant to `reference`
/// decides the tense; its magnitude is bucketed by floor division with
/// fixed thresholds (60 s, 60 min, 24 h, 7 d per week, 30 d per month,
/// 365 d per year; no calendar-aware correction). The largest nonzero
/// unit wins, in the order years, months, weeks, days, hours, minutes,
/// falling back to seconds. A past instant under 10 elapsed seconds is
/// `"just now"`; the future branch never is. Units take a plural `s`
/// whenever the magnitude is not exactly 1.
///
/// # Arguments
///
/// * `date` — the instant to describe
/// * `reference` — the "now" anchor the phrase is relative to
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Local, TimeZone};
/// use toolbelt::datetime::time_ago_at;
///
/// let reference = Local.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
///
/// assert_eq!(
///     time_ago_at(reference - Duration::hours(3), reference).unwrap(),
///     "3 hours ago"
/// );
/// assert_eq!(
///     time_ago_at(reference + Duration::days(1), reference).unwrap(),
///     "in 1 day"
/// );
/// assert_eq!(
///     time_ago_at(reference - Duration::seconds(5), reference).unwrap(),
///     "just now"
/// );
/// ```
pub fn time_ago_at(
    date: impl Into<DateInput>,
    reference: DateTime<Local>,
) -> Option<String> {
    let dt = coerce_date(date)?;

    let diff_millis = reference.timestamp_millis() - dt.timestamp_millis();
    let is_future = diff_millis < 0;
    let abs_millis = diff_millis.unsigned_abs();

    let seconds = abs_millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let weeks = days / 7;
    let months = days / 30;
    let years = days / 365;

    if !is_future && seconds < 10 {
        return Some("just now".to_string());
    }

    let (value, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else if weeks > 0 {
        (weeks, "week")
    } else if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if minutes > 0 {
        (minutes, "minute")
    } else {
        (seconds, "second")
    };

    let suffix = if value == 1 { "" } else { "s" };
    Some(if is_future {
        format!("in {value} {unit}{suffix}")
    } else {
        format!("{value} {unit}{suffix} ago")
    })
}

// ── Day difference ──────────────────────────────────────────────────────────

/// Whole days between two date-like values.
///
/// The absolute millisecond difference floor-divided by 86 400 000, so the
/// result is symmetric in its arguments and two times on the same calendar
/// day give 0 unless a full 24-hour multiple actually elapsed between
/// them.
///
/// # Returns
///
/// The whole-day count, or `None` if either input fails to coerce.
///
/// # Examples
///
/// ```
/// use toolbelt::datetime::days_between;
///
/// // Ten days apart, expressed as epoch milliseconds.
/// assert_eq!(days_between(0i64, 864_000_000i64), Some(10));
/// assert_eq!(days_between(864_000_000i64, 0i64), Some(10));
/// assert_eq!(days_between("2024-03-15", "nonsense"), None);
/// ```
pub fn days_between(a: impl Into<DateInput>, b: impl Into<DateInput>) -> Option<i64> {
    let a = coerce_date(a)?;
    let b = coerce_date(b)?;

    let diff_millis = (b.timestamp_millis() - a.timestamp_millis()).unsigned_abs();
    Some((diff_millis / MILLIS_PER_DAY) as i64)
}

// ── Tests ───────────────────────────────────────────────────────────────────
