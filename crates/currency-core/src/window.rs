// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lookback windows.
//!
//! The regulations count time three ways: exact hours (61.195(a): 8 hours in
//! any 24), calendar days (61.57(a): preceding 90 days) and calendar months
//! (61.56(c): preceding 24 calendar months). Calendar windows are widened to
//! start at local midnight or on the first of the month respectively.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// A lookback ending at a reference instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// Exactly N hours.
    Hours(u32),
    /// N calendar days, starting at midnight.
    CalendarDays(u32),
    /// N calendar months, starting on the first of the month.
    CalendarMonths(u32),
}

impl TimeWindow {
    /// Earliest instant inside the window that ends at `reference`.
    ///
    /// Dates beyond chrono's representable range saturate to the minimum date,
    /// which simply makes the window unbounded.
    pub fn start_date(self, reference: NaiveDateTime) -> NaiveDateTime {
        match self {
            Self::Hours(hours) => reference
                .checked_sub_signed(TimeDelta::hours(i64::from(hours)))
                .unwrap_or(NaiveDateTime::MIN),
            Self::CalendarDays(days) => reference
                .date()
                .checked_sub_days(Days::new(u64::from(days)))
                .map_or(NaiveDateTime::MIN, midnight),
            Self::CalendarMonths(months) => {
                let day = reference
                    .date()
                    .checked_sub_months(Months::new(months))
                    .unwrap_or(NaiveDate::MIN);
                midnight(first_of_month(day))
            }
        }
    }
}

fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::default())
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day)
}
