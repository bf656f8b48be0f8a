// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.58: proficiency checks for type-rated aircraft.

use super::{unless, CurrencyRule};
use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

/// Shared guard: a type-rated flight the pilot is not receiving instruction on
/// and which is not itself the check.
fn needs_check(flight: &Flight) -> bool {
    flight.aircraft().is_some_and(|a| a.requires_type_rating())
        && !flight.is_dual_received()
        && !flight.checks.proficiency_check
}

fn checked_within(
    index: &FlightIndex,
    window: TimeWindow,
    flight: &Flight,
    criteria: MatchCriteria<'_>,
) -> bool {
    index
        .flights_within(window, flight, criteria)
        .iter()
        .any(|f| f.checks.proficiency_check)
}

/// Type-rated aircraft without a proficiency check in any aircraft within 12
/// calendar months.
#[derive(Debug)]
pub struct NoProficiencyCheck<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoProficiencyCheck<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoProficiencyCheck<'_> {
    fn violation(&self) -> Violation {
        Violation::NoProficiencyCheck
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if !needs_check(flight) {
            return Ok(None);
        }
        let checked = checked_within(
            self.index,
            TimeWindow::CalendarMonths(12),
            flight,
            MatchCriteria::none(flight),
        );
        Ok(unless(checked, Violation::NoProficiencyCheck))
    }
}

/// Type-rated aircraft without a proficiency check in the same type within 24
/// calendar months.
#[derive(Debug)]
pub struct NoProficiencyCheckInType<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoProficiencyCheckInType<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoProficiencyCheckInType<'_> {
    fn violation(&self) -> Violation {
        Violation::NoProficiencyCheckInType
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if !needs_check(flight) {
            return Ok(None);
        }
        let checked = checked_within(
            self.index,
            TimeWindow::CalendarMonths(24),
            flight,
            MatchCriteria::type_if_required(flight),
        );
        Ok(unless(checked, Violation::NoProficiencyCheckInType))
    }
}
