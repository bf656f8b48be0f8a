// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The closed catalogue of currency rules.
//!
//! Every rule is a two-phase checker: [`CurrencyRule::setup`] runs once,
//! sequentially, before any flight is checked; [`CurrencyRule::check`] is then
//! called concurrently for every flight and must not mutate shared state.
//! Rules borrow the [`FlightIndex`] for their whole lifetime and never modify it.

mod flight_review;
mod ifr;
mod instructor;
mod nvg;
mod passenger;
mod proficiency;
mod sic;

use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;

pub use flight_review::NoFlightReview;
pub use ifr::NoIfrCurrency;
pub use instructor::{DualGiven8In24, DualGivenTimeInType};
pub use nvg::{NoNvgCurrency, NoNvgPassengerCurrency};
pub use passenger::{NoNightPassengerCurrency, NoPassengerCurrency};
pub use proficiency::{NoProficiencyCheck, NoProficiencyCheckInType};
pub use sic::NoSicCurrency;

/// A single regulation checked against one flight at a time.
pub trait CurrencyRule: Send + Sync {
    /// Violation this rule reports.
    fn violation(&self) -> Violation;

    /// One-time pre-computation. Runs before any [`check`](Self::check) call.
    fn setup(&mut self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// `Ok(None)` when the flight is exempt or compliant.
    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError>;
}

/// Builds every rule over `index`, in [`Violation::ALL`] order.
pub fn catalogue(index: &FlightIndex) -> Vec<Box<dyn CurrencyRule + '_>> {
    vec![
        Box::new(NoFlightReview::new(index)),
        Box::new(NoPassengerCurrency::new(index)),
        Box::new(NoNightPassengerCurrency::new(index)),
        Box::new(NoIfrCurrency::new(index)),
        Box::new(NoProficiencyCheck::new(index)),
        Box::new(NoProficiencyCheckInType::new(index)),
        Box::new(NoNvgCurrency::new(index)),
        Box::new(NoNvgPassengerCurrency::new(index)),
        Box::new(DualGiven8In24::new(index)),
        Box::new(DualGivenTimeInType::new(index)),
        Box::new(NoSicCurrency::new(index)),
    ]
}

/// The pilot logged PIC time and was not receiving instruction.
pub(crate) fn acting_as_pic(flight: &Flight) -> bool {
    flight.is_pic() && !flight.is_dual_received()
}

pub(crate) fn sum_by<'a, I, N>(flights: I, field: impl Fn(&Flight) -> N) -> u64
where
    I: IntoIterator<Item = &'a Flight>,
    N: Into<u64>,
{
    flights
        .into_iter()
        .map(|f| Into::<u64>::into(field(f)))
        .sum()
}

/// `violation` unless `satisfied`.
pub(crate) fn unless(satisfied: bool, violation: Violation) -> Option<Violation> {
    (!satisfied).then_some(violation)
}
