// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.57(a) and (b): day and night passenger-carrying currency.
//!
//! Both rules look back 90 calendar days in the same category, class and (if
//! type-rated) type. A tailwheel flight additionally needs its takeoffs and
//! full-stop landings to come from tailwheel aircraft.

use super::{acting_as_pic, sum_by, unless, CurrencyRule};
use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

const REQUIRED_OPERATIONS: u64 = 3;
/// PIC + SIC minutes before the flight that open the alternate night path.
const ALTERNATE_TOTAL_MINUTES: u64 = 1_500 * 60;
/// PIC + SIC minutes in type within 90 days that open the alternate night path.
const ALTERNATE_IN_TYPE_MINUTES: u64 = 15 * 60;

/// Passengers carried without 3 takeoffs and 3 landings in 90 days.
#[derive(Debug)]
pub struct NoPassengerCurrency<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoPassengerCurrency<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoPassengerCurrency<'_> {
    fn violation(&self) -> Violation {
        Violation::NoPassengerCurrency
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if flight.aircraft().is_none() || !acting_as_pic(flight) || !flight.has_passengers() {
            return Ok(None);
        }

        let recent = self.index.flights_within(
            TimeWindow::CalendarDays(90),
            flight,
            MatchCriteria::full(flight),
        );
        let all = recent.iter().copied();
        let current = has_operations(all, Flight::total_takeoffs, Flight::total_landings)
            && (!flight.is_tailwheel()
                || has_operations(
                    recent.iter().copied().filter(|f| f.is_tailwheel()),
                    Flight::total_takeoffs,
                    |f| f.operations.full_stop_landings,
                ));
        Ok(unless(current, Violation::NoPassengerCurrency))
    }
}

/// Passengers carried at night without 3 night takeoffs and 3 night
/// full-stop landings.
///
/// Pilots of turbine, type-rated aircraft may instead look back 6 calendar
/// months when they have 1,500 hours PIC + SIC and 15 hours in type within 90
/// days (FAR 61.57(e)(4)). The logbook has no multi-crew flag, so "turbine and
/// type-rated" stands in for multi-crew; this is an approximation.
#[derive(Debug)]
pub struct NoNightPassengerCurrency<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoNightPassengerCurrency<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }

    fn night_current(&self, window: TimeWindow, flight: &Flight) -> bool {
        let recent = self
            .index
            .flights_within(window, flight, MatchCriteria::full(flight));
        let night_takeoffs = |f: &Flight| f.operations.night_takeoffs;
        let night_full_stops = |f: &Flight| f.operations.night_full_stop_landings;
        has_operations(recent.iter().copied(), night_takeoffs, night_full_stops)
            && (!flight.is_tailwheel()
                || has_operations(
                    recent.iter().copied().filter(|f| f.is_tailwheel()),
                    night_takeoffs,
                    night_full_stops,
                ))
    }

    fn qualifies_for_alternate(&self, flight: &Flight) -> bool {
        let Some(aircraft) = flight.aircraft() else {
            return false;
        };
        if !aircraft.requires_type_rating() || !aircraft.is_turbine_powered() {
            return false;
        }
        let pic_and_sic = |f: &Flight| u64::from(f.times.pic) + u64::from(f.times.sic);

        if sum_by(self.index.flights_before(flight), pic_and_sic) < ALTERNATE_TOTAL_MINUTES {
            return false;
        }

        let designator = flight.type_designator();
        let in_type = self
            .index
            .flights_within(
                TimeWindow::CalendarDays(90),
                flight,
                MatchCriteria::full(flight),
            )
            .into_iter()
            .filter(|f| f.type_designator() == designator);
        sum_by(in_type, pic_and_sic) >= ALTERNATE_IN_TYPE_MINUTES
    }
}

impl CurrencyRule for NoNightPassengerCurrency<'_> {
    fn violation(&self) -> Violation {
        Violation::NoNightPassengerCurrency
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if flight.aircraft().is_none() || !acting_as_pic(flight) {
            return Ok(None);
        }
        if !flight.has_passengers() || !flight.is_night() {
            return Ok(None);
        }

        if self.night_current(TimeWindow::CalendarDays(90), flight) {
            return Ok(None);
        }
        let alternate = self.qualifies_for_alternate(flight)
            && self.night_current(TimeWindow::CalendarMonths(6), flight);
        Ok(unless(alternate, Violation::NoNightPassengerCurrency))
    }
}

fn has_operations<'a, I, T, L>(
    flights: I,
    takeoffs: impl Fn(&Flight) -> T,
    landings: impl Fn(&Flight) -> L,
) -> bool
where
    I: IntoIterator<Item = &'a Flight>,
    T: Into<u64>,
    L: Into<u64>,
{
    let (took_off, landed) = flights.into_iter().fold((0_u64, 0_u64), |(t, l), f| {
        let (up, down): (u64, u64) = (takeoffs(f).into(), landings(f).into());
        (t + up, l + down)
    });
    took_off >= REQUIRED_OPERATIONS && landed >= REQUIRED_OPERATIONS
}
