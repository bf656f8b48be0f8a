// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.55(b): second-in-command currency in type-rated aircraft.

use super::{sum_by, unless, CurrencyRule};
use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

const REQUIRED_OPERATIONS: u64 = 3;

/// SIC in a type-rated aircraft without 3 takeoffs and 3 landings in type
/// within 90 days.
///
/// Only checked with no passengers aboard; the logbook cannot tell ferry or
/// test flights apart, so they are not exempted.
#[derive(Debug)]
pub struct NoSicCurrency<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoSicCurrency<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoSicCurrency<'_> {
    fn violation(&self) -> Violation {
        Violation::NoSicCurrency
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        let Some(aircraft) = flight.aircraft() else {
            return Ok(None);
        };
        if !flight.is_sic() || !aircraft.requires_type_rating() || flight.has_passengers() {
            return Ok(None);
        }

        let recent = self.index.flights_within(
            TimeWindow::CalendarDays(90),
            flight,
            MatchCriteria::full(flight),
        );
        let takeoffs = sum_by(recent.iter().copied(), Flight::total_takeoffs);
        let landings = sum_by(recent.iter().copied(), Flight::total_landings);
        Ok(unless(
            takeoffs >= REQUIRED_OPERATIONS && landings >= REQUIRED_OPERATIONS,
            Violation::NoSicCurrency,
        ))
    }
}
