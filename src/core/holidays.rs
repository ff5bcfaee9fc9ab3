//! Holidays that fall on a weekday rule instead of a fixed date.

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovableHoliday {
    /// Second Sunday of May.
    MothersDay,
    /// Third Sunday of June.
    FathersDay,
}

impl MovableHoliday {
    pub const ALL: [MovableHoliday; 2] = [MovableHoliday::MothersDay, MovableHoliday::FathersDay];

    pub fn name(&self) -> &'static str {
        match self {
            MovableHoliday::MothersDay => "Mother's Day",
            MovableHoliday::FathersDay => "Father's Day",
        }
    }

    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        match self {
            MovableHoliday::MothersDay => NaiveDate::from_weekday_of_month_opt(year, 5, Weekday::Sun, 2),
            MovableHoliday::FathersDay => NaiveDate::from_weekday_of_month_opt(year, 6, Weekday::Sun, 3),
        }
    }

    /// Next date of the holiday on or after `reference`.
    pub fn next_on_or_after(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(reference.year())?;
        if this_year >= reference {
            Some(this_year)
        } else {
            self.in_year(reference.year() + 1)
        }
    }
}

/// All movable holidays with their next date, soonest first.
pub fn upcoming_holidays(reference: NaiveDate) -> Vec<(MovableHoliday, NaiveDate)> {
    let mut out: Vec<(MovableHoliday, NaiveDate)> = MovableHoliday::ALL
        .iter()
        .filter_map(|h| h.next_on_or_after(reference).map(|d| (*h, d)))
        .collect();
    out.sort_by_key(|(_, d)| *d);
    out
}
