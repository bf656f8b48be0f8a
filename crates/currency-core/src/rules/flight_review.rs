// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.56(c): flight review within the preceding 24 calendar months.

use super::{acting_as_pic, unless, CurrencyRule};
use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

/// PIC without a flight review or checkride in 24 calendar months.
///
/// Student solos, the review itself and checkrides are exempt.
#[derive(Debug)]
pub struct NoFlightReview<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoFlightReview<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoFlightReview<'_> {
    fn violation(&self) -> Violation {
        Violation::NoFlightReview
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if flight.aircraft().is_none() || !acting_as_pic(flight) {
            return Ok(None);
        }
        if flight.is_student_solo() || flight.checks.flight_review || flight.checks.checkride {
            return Ok(None);
        }

        let reviewed = self
            .index
            .flights_within(
                TimeWindow::CalendarMonths(24),
                flight,
                MatchCriteria::none(flight),
            )
            .iter()
            .any(|f| f.checks.flight_review || f.checks.checkride);
        Ok(unless(reviewed, Violation::NoFlightReview))
    }
}
