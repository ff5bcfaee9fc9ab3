//! Yearly recurrence arithmetic.
//!
//! Every dated view in giftlog (event lists, birthdays, dashboard) resolves
//! an event's stored anchor date through this module. All functions are pure:
//! the reference date ("today") is always an argument, never read from the
//! clock here.
//!
//! Only yearly, same month/day recurrence is supported. The year stored in a
//! recurring anchor is historical (e.g. a birth year) and ignored.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime};

/// Formats accepted for anchors that carry a time component. The time is
/// discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored anchor date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DD HH:MM[:SS]`
/// forms. Empty, blank or otherwise unparseable input yields `None`, which
/// every consumer treats as "no valid occurrence".
pub fn parse_anchor(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// The anchor's month/day placed in `year`.
///
/// A day that does not exist in the target month rolls forward into the next
/// month, so Feb 29 becomes Mar 1 in non-leap years.
pub fn in_year(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day()).or_else(|| {
        NaiveDate::from_ymd_opt(year, anchor.month(), 1)?
            .checked_add_days(Days::new(u64::from(anchor.day() - 1)))
    })
}

/// Next occurrence of an already parsed anchor, on or after `reference`.
///
/// - recurring: the anchor's month/day in the reference year, or in the
///   following year when that date has already passed;
/// - non-recurring: the literal anchor date, or `None` once it has passed.
pub fn next_occurrence_of(
    anchor: NaiveDate,
    recurring: bool,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    if !recurring {
        return (anchor >= reference).then_some(anchor);
    }

    let candidate = in_year(anchor, reference.year())?;
    if candidate < reference {
        in_year(anchor, reference.year() + 1)
    } else {
        Some(candidate)
    }
}

/// Most recent occurrence strictly before `reference`.
///
/// - recurring: the anchor's month/day in the reference year when already
///   passed, otherwise in the previous year;
/// - non-recurring: the literal anchor date if it is in the past.
///
/// Nothing happens before the anchor itself: a recurring event first due
/// after that candidate has no past occurrence.
pub fn previous_occurrence_of(
    anchor: NaiveDate,
    recurring: bool,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    if !recurring {
        return (anchor < reference).then_some(anchor);
    }

    let candidate = in_year(anchor, reference.year())?;
    let previous = if candidate < reference {
        Some(candidate)
    } else {
        in_year(anchor, reference.year() - 1)
    };
    previous.filter(|d| *d >= anchor)
}

/// Parse `anchor` and compute its next occurrence relative to `reference`.
pub fn next_occurrence(
    anchor: Option<&str>,
    recurring: bool,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    next_occurrence_of(parse_anchor(anchor?)?, recurring, reference)
}

/// Parse `anchor` and compute its most recent occurrence before `reference`.
pub fn previous_occurrence(
    anchor: Option<&str>,
    recurring: bool,
    reference: NaiveDate,
) -> Option<NaiveDate> {
    previous_occurrence_of(parse_anchor(anchor?)?, recurring, reference)
}

/// Signed number of calendar days from `reference` to `target`.
///
/// Positive when the target is later, negative when earlier, zero on the
/// same day.
pub fn days_between(reference: NaiveDate, target: NaiveDate) -> i64 {
    (target - reference).num_days()
}

/// Calendar-month addition. The day is clamped to the end of the target
/// month (Aug 31 + 6 months = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
