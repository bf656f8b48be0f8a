// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Aircraft-equivalence predicate.
//!
//! Currency is earned in the same category, class and (for type-rated
//! aircraft) type as the flight it is exercised in. A Full Flight Simulator
//! earns credit toward whatever it simulates; lesser devices never do.

use crate::aircraft::Aircraft;
use crate::flight::Flight;

/// Which axes a candidate flight must share with a reference flight.
///
/// Axes are independent; [`none`](Self::none) accepts every other flight.
#[derive(Clone, Copy, Debug)]
pub struct MatchCriteria<'a> {
    reference: &'a Flight,
    category: bool,
    class: bool,
    type_if_required: bool,
}

impl<'a> MatchCriteria<'a> {
    /// Criteria with explicit axes.
    pub fn new(reference: &'a Flight, category: bool, class: bool, type_if_required: bool) -> Self {
        Self {
            reference,
            category,
            class,
            type_if_required,
        }
    }

    /// No aircraft constraint.
    pub fn none(reference: &'a Flight) -> Self {
        Self::new(reference, false, false, false)
    }

    /// Same category only.
    pub fn category(reference: &'a Flight) -> Self {
        Self::new(reference, true, false, false)
    }

    /// Same category, class, and type when the reference aircraft is type-rated.
    pub fn full(reference: &'a Flight) -> Self {
        Self::new(reference, true, true, true)
    }

    /// Same type when the reference aircraft is type-rated; nothing otherwise.
    pub fn type_if_required(reference: &'a Flight) -> Self {
        Self::new(reference, false, false, true)
    }

    /// The flight the criteria were built for.
    pub fn reference(&self) -> &'a Flight {
        self.reference
    }

    /// Whether `candidate` counts toward the reference flight's currency.
    ///
    /// A flight never matches itself. When any axis is enabled, both flights
    /// need a resolved aircraft.
    pub fn matches(&self, candidate: &Flight) -> bool {
        if candidate.id == self.reference.id {
            return false;
        }
        if !(self.category || self.class || self.type_if_required) {
            return true;
        }
        let (Some(current), Some(past)) = (self.reference.aircraft(), candidate.aircraft()) else {
            return false;
        };
        (!self.category || matches_category(current, past))
            && (!self.class || matches_class(current, past))
            && (!self.type_if_required || matches_type(current, past))
    }
}

fn matches_category(current: &Aircraft, past: &Aircraft) -> bool {
    let current = &current.aircraft_type;
    let past = &past.aircraft_type;
    if current.category == crate::Category::Simulator || current.category == past.category {
        return true;
    }
    past.is_full_flight_simulator() && past.simulated_category() == Some(current.category)
}

fn matches_class(current: &Aircraft, past: &Aircraft) -> bool {
    let current = &current.aircraft_type;
    let past = &past.aircraft_type;
    if current.class == past.class {
        return true;
    }
    past.is_full_flight_simulator() && past.simulated_class() == current.class
}

fn matches_type(current: &Aircraft, past: &Aircraft) -> bool {
    if !current.requires_type_rating() {
        return true;
    }
    // A device's designator is the type it simulates, so the FFS case reduces
    // to the same comparison.
    current.aircraft_type.designator == past.aircraft_type.designator
}
