// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chronological flight store.
//!
//! Flights are stable-sorted by date once at construction. Every lookback
//! query is a binary search for the window start followed by a linear scan up
//! to the reference flight's date, filtered by [`MatchCriteria`]. The index is
//! immutable after construction and shared read-only by all workers.

use chrono::NaiveDateTime;
use rustc_hash::FxHashSet;

use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::window::TimeWindow;

/// Flights sorted by ascending date; ties keep their input order.
#[derive(Clone, Debug, Default)]
pub struct FlightIndex {
    flights: Vec<Flight>,
}

impl FlightIndex {
    /// Sorts `flights` by date and rejects duplicate identifiers.
    pub fn new(mut flights: Vec<Flight>) -> Result<Self, ValidationError> {
        {
            let mut seen = FxHashSet::default();
            for flight in &flights {
                if !seen.insert(&flight.id) {
                    return Err(ValidationError::DuplicateFlight(flight.id.clone()));
                }
            }
        }
        flights.sort_by_key(|f| f.date);
        Ok(Self { flights })
    }

    /// Sorted flights.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// True when the logbook is empty.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Flight at a sorted position.
    pub fn get(&self, position: usize) -> Option<&Flight> {
        self.flights.get(position)
    }

    /// Sorted position of `flight`, located by date then identity.
    pub fn position_of(&self, flight: &Flight) -> Option<usize> {
        let start = self.lower_bound(flight.date);
        let end = self.upper_bound(flight.date);
        (start..end).find(|&i| self.flights[i].id == flight.id)
    }

    /// First position whose date is `>= date`.
    pub fn lower_bound(&self, date: NaiveDateTime) -> usize {
        self.flights.partition_point(|f| f.date < date)
    }

    /// First position whose date is `> date`.
    pub fn upper_bound(&self, date: NaiveDateTime) -> usize {
        self.flights.partition_point(|f| f.date <= date)
    }

    /// Matching flights dated in `[window start, flight.date]`, excluding
    /// `flight` itself.
    pub fn flights_within<'a>(
        &'a self,
        window: TimeWindow,
        flight: &Flight,
        criteria: MatchCriteria<'_>,
    ) -> Vec<&'a Flight> {
        self.entries_within(window, flight, criteria)
            .map(|(_, f)| f)
            .collect()
    }

    /// Like [`flights_within`](Self::flights_within) but yields sorted
    /// positions alongside the flights.
    pub fn entries_within<'a, 'c>(
        &'a self,
        window: TimeWindow,
        flight: &Flight,
        criteria: MatchCriteria<'c>,
    ) -> impl Iterator<Item = (usize, &'a Flight)> + 'c
    where
        'a: 'c,
    {
        let start = window.start_date(flight.date);
        self.entries_between(start, flight.date, criteria)
    }

    /// Matching flights dated in `[start, end]`, excluding the criteria's
    /// reference flight.
    pub fn flights_between<'a>(
        &'a self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        criteria: MatchCriteria<'_>,
    ) -> Vec<&'a Flight> {
        self.entries_between(start, end, criteria)
            .map(|(_, f)| f)
            .collect()
    }

    fn entries_between<'a, 'c>(
        &'a self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        criteria: MatchCriteria<'c>,
    ) -> impl Iterator<Item = (usize, &'a Flight)> + 'c
    where
        'a: 'c,
    {
        let lo = self.lower_bound(start);
        let hi = self.upper_bound(end).max(lo);
        self.flights[lo..hi]
            .iter()
            .enumerate()
            .map(move |(offset, f)| (lo + offset, f))
            .filter(move |(_, f)| criteria.matches(f))
    }

    /// The window's flights plus `flight` itself (for totals that include the
    /// flight under inspection).
    pub fn flights_within_including_self<'a>(
        &'a self,
        window: TimeWindow,
        flight: &'a Flight,
        criteria: MatchCriteria<'_>,
    ) -> Vec<&'a Flight> {
        let mut found = self.flights_within(window, flight, criteria);
        found.push(flight);
        found
    }

    /// Every flight dated strictly before `flight`, unfiltered.
    pub fn flights_before(&self, flight: &Flight) -> &[Flight] {
        &self.flights[..self.lower_bound(flight.date)]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use chrono::NaiveDate;

    use super::*;
    use crate::flight::FlightId;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid date")
    }

    fn flight(id: &str, date: NaiveDateTime) -> Flight {
        Flight::new(FlightId::new(id), date)
    }

    #[test]
    fn sorts_stably_by_date() {
        let index = FlightIndex::new(vec![
            flight("c", at(3, 8)),
            flight("a", at(1, 8)),
            flight("b1", at(2, 8)),
            flight("b2", at(2, 8)),
        ])
        .expect("unique ids");
        let ids: Vec<_> = index.flights().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "b1", "b2", "c"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = FlightIndex::new(vec![flight("x", at(1, 8)), flight("x", at(2, 8))])
            .expect_err("duplicate");
        assert!(matches!(
            err,
            ValidationError::DuplicateFlight(id) if id.as_str() == "x"
        ));
    }

    #[test]
    fn window_is_inclusive_and_excludes_self() {
        let index = FlightIndex::new(vec![
            flight("old", at(1, 7)),
            flight("edge", at(1, 8)),
            flight("same_time", at(2, 8)),
            flight("me", at(2, 8)),
            flight("later", at(3, 8)),
        ])
        .expect("unique ids");
        let me = &index.flights()[3];
        assert_eq!(index.position_of(me), Some(3));
        let found = index.flights_within(TimeWindow::Hours(24), me, MatchCriteria::none(me));
        let ids: Vec<_> = found.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["edge", "same_time"]);
    }

    #[test]
    fn including_self_appends_reference() {
        let index = FlightIndex::new(vec![flight("a", at(1, 8)), flight("b", at(1, 12))])
            .expect("unique ids");
        let b = &index.flights()[1];
        let found =
            index.flights_within_including_self(TimeWindow::Hours(24), b, MatchCriteria::none(b));
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].id.as_str(), "b");
    }

    #[test]
    fn before_is_strict() {
        let index = FlightIndex::new(vec![
            flight("a", at(1, 8)),
            flight("b", at(2, 8)),
            flight("c", at(2, 8)),
        ])
        .expect("unique ids");
        let c = &index.flights()[2];
        let before: Vec<_> = index
            .flights_before(c)
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(before, ["a"]);
    }

    #[test]
    fn empty_index_answers_empty() {
        let index = FlightIndex::default();
        let probe = flight("p", at(1, 8));
        assert!(index.is_empty());
        let found = index.flights_within(
            TimeWindow::CalendarDays(90),
            &probe,
            MatchCriteria::none(&probe),
        );
        assert!(found.is_empty());
        assert_eq!(index.position_of(&probe), None);
    }
}
