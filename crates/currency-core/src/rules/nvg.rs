// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.57(f): night vision goggle currency.
//!
//! Current means 3 NVG takeoffs and 3 NVG landings in the window, or an NVG
//! proficiency check in the same category. Devices are compared by the
//! category they simulate.

use super::{acting_as_pic, sum_by, unless, CurrencyRule};
use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

const REQUIRED_OPERATIONS: u64 = 3;

fn nvg_current(index: &FlightIndex, window: TimeWindow, flight: &Flight) -> bool {
    let recent = index.flights_within(window, flight, MatchCriteria::none(flight));
    let takeoffs = sum_by(recent.iter().copied(), |f| f.operations.nvg_takeoffs);
    let landings = sum_by(recent.iter().copied(), |f| f.operations.nvg_landings);
    if takeoffs >= REQUIRED_OPERATIONS && landings >= REQUIRED_OPERATIONS {
        return true;
    }
    recent
        .iter()
        .any(|check| is_nvg_check_in_category(flight, check))
}

fn is_nvg_check_in_category(flight: &Flight, check: &Flight) -> bool {
    if !check.checks.nvg_proficiency_check {
        return false;
    }
    let (Some(current), Some(checked)) = (flight.aircraft(), check.aircraft()) else {
        return false;
    };
    current.aircraft_type.effective_category() == checked.aircraft_type.effective_category()
}

/// NVG takeoff or landing as PIC without NVG currency in 4 calendar months.
#[derive(Debug)]
pub struct NoNvgCurrency<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoNvgCurrency<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoNvgCurrency<'_> {
    fn violation(&self) -> Violation {
        Violation::NoNvgCurrency
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if flight.aircraft().is_none() || !acting_as_pic(flight) || !flight.used_nvg() {
            return Ok(None);
        }
        let current = nvg_current(self.index, TimeWindow::CalendarMonths(4), flight);
        Ok(unless(current, Violation::NoNvgCurrency))
    }
}

/// NVG operations with passengers aboard without NVG currency in 2 calendar
/// months.
#[derive(Debug)]
pub struct NoNvgPassengerCurrency<'a> {
    index: &'a FlightIndex,
}

impl<'a> NoNvgPassengerCurrency<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for NoNvgPassengerCurrency<'_> {
    fn violation(&self) -> Violation {
        Violation::NoNvgPassengerCurrency
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if flight.aircraft().is_none() || !acting_as_pic(flight) {
            return Ok(None);
        }
        if !flight.used_nvg() || !flight.has_passengers() {
            return Ok(None);
        }
        let current = nvg_current(self.index, TimeWindow::CalendarMonths(2), flight);
        Ok(unless(current, Violation::NoNvgPassengerCurrency))
    }
}
