//! Upcoming/past bucketing and ordering of calendar events.

use crate::core::calendar::CalendarEvent;
use crate::core::recurrence::{add_months, days_between, next_occurrence_of, previous_occurrence_of};
use chrono::NaiveDate;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Upcoming,
    Past,
}

/// A calendar event resolved against a reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub event: CalendarEvent,
    pub date: NaiveDate,
    /// Signed days from the reference date to `date`.
    pub days: i64,
}

/// The date that represents `event` in the given view:
/// the next occurrence for `Upcoming`, the most recent past one for `Past`.
pub fn occurrence_in(event: &CalendarEvent, mode: ViewMode, reference: NaiveDate) -> Option<NaiveDate> {
    let anchor = event.anchor_date()?;
    match mode {
        ViewMode::Upcoming => next_occurrence_of(anchor, event.recurring, reference),
        ViewMode::Past => previous_occurrence_of(anchor, event.recurring, reference),
    }
}

/// Keep the events that belong to the bucket.
///
/// Upcoming keeps occurrences in `[reference, reference + window_months]`;
/// Past keeps occurrences strictly before `reference` and has no window.
/// Events without a valid anchor never survive.
pub fn filter_events(
    events: &[CalendarEvent],
    mode: ViewMode,
    window_months: u32,
    reference: NaiveDate,
) -> Vec<CalendarEvent> {
    let window_end = add_months(reference, window_months);

    events
        .iter()
        .filter(|ev| match occurrence_in(ev, mode, reference) {
            None => false,
            Some(date) => match mode {
                ViewMode::Upcoming => date >= reference && date <= window_end,
                ViewMode::Past => date < reference,
            },
        })
        .cloned()
        .collect()
}

fn compare(a: Option<NaiveDate>, b: Option<NaiveDate>, mode: ViewMode) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match mode {
            ViewMode::Upcoming => x.cmp(&y),
            ViewMode::Past => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order events by occurrence: ascending for Upcoming, descending for Past.
/// Events without an occurrence go last; ties keep their input order.
pub fn sort_by_occurrence(
    events: &[CalendarEvent],
    mode: ViewMode,
    reference: NaiveDate,
) -> Vec<CalendarEvent> {
    let mut keyed: Vec<(Option<NaiveDate>, &CalendarEvent)> = events
        .iter()
        .map(|ev| (occurrence_in(ev, mode, reference), ev))
        .collect();

    // sort_by is stable
    keyed.sort_by(|a, b| compare(a.0, b.0, mode));

    keyed.into_iter().map(|(_, ev)| ev.clone()).collect()
}

/// Sort and annotate every event that has an occurrence in `mode`,
/// without any window.
pub fn annotate(events: &[CalendarEvent], mode: ViewMode, reference: NaiveDate) -> Vec<Occurrence> {
    sort_by_occurrence(events, mode, reference)
        .into_iter()
        .filter_map(|event| {
            let date = occurrence_in(&event, mode, reference)?;
            Some(Occurrence {
                days: days_between(reference, date),
                date,
                event,
            })
        })
        .collect()
}

/// Filter, sort and annotate: what list views render.
pub fn bucket(
    events: &[CalendarEvent],
    mode: ViewMode,
    window_months: u32,
    reference: NaiveDate,
) -> Vec<Occurrence> {
    annotate(&filter_events(events, mode, window_months, reference), mode, reference)
}
