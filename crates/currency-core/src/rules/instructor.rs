// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.195: limits on flight instructors.

use super::{sum_by, unless, CurrencyRule};
use crate::aircraft::Category;
use crate::criteria::MatchCriteria;
use crate::error::{ClassificationError, ValidationError};
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

/// 61.195(a): 8 hours of instruction in any 24 consecutive hours.
const MAX_DUAL_GIVEN_MINUTES: u64 = 8 * 60;
/// 61.195(f): 5 hours PIC in make and model.
const MIN_PIC_IN_TYPE_MINUTES: u64 = 5 * 60;

fn giving_instruction(flight: &Flight) -> bool {
    flight.aircraft().is_some() && flight.is_dual_given() && flight.is_pic()
}

/// More than 8 hours of instruction given in the 24 hours ending with this
/// flight, this flight included.
#[derive(Debug)]
pub struct DualGiven8In24<'a> {
    index: &'a FlightIndex,
}

impl<'a> DualGiven8In24<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for DualGiven8In24<'_> {
    fn violation(&self) -> Violation {
        Violation::DualGiven8In24
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if !giving_instruction(flight) {
            return Ok(None);
        }
        let window = self.index.flights_within_including_self(
            TimeWindow::Hours(24),
            flight,
            MatchCriteria::none(flight),
        );
        let given = sum_by(window, |f| f.times.dual_given);
        Ok(unless(
            given <= MAX_DUAL_GIVEN_MINUTES,
            Violation::DualGiven8In24,
        ))
    }
}

/// Instruction given in a multi-engine airplane, rotorcraft or powered-lift
/// without 5 hours PIC in that type beforehand.
#[derive(Debug)]
pub struct DualGivenTimeInType<'a> {
    index: &'a FlightIndex,
}

impl<'a> DualGivenTimeInType<'a> {
    /// Rule over `index`.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }
}

impl CurrencyRule for DualGivenTimeInType<'_> {
    fn violation(&self) -> Violation {
        Violation::DualGivenTimeInType
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if !giving_instruction(flight) {
            return Ok(None);
        }
        let Some(aircraft) = flight.aircraft() else {
            return Ok(None);
        };
        let ty = &aircraft.aircraft_type;
        let applies = match ty.category {
            Category::Airplane => ty
                .class
                .ok_or_else(|| ClassificationError::MissingClass {
                    type_id: ty.id.clone(),
                })?
                .is_multi_engine(),
            Category::Rotorcraft | Category::PoweredLift => true,
            _ => false,
        };
        if !applies {
            return Ok(None);
        }

        let designator = flight.type_designator();
        let in_type = self
            .index
            .flights_before(flight)
            .iter()
            .filter(|f| f.type_designator() == designator);
        let pic = sum_by(in_type, |f| f.times.pic);
        Ok(unless(
            pic >= MIN_PIC_IN_TYPE_MINUTES,
            Violation::DualGivenTimeInType,
        ))
    }
}
