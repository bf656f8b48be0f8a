// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! FAR 61.57(c): instrument currency.
//!
//! Six approaches and a hold within 6 calendar months keep a pilot current;
//! an IPC restores currency outright. Practice approaches only count when the
//! pilot was themselves inside the 12-month grace period when flying them,
//! which makes "counts toward currency" a recursive property over time.
//!
//! A flight only ever depends on flights sorted before it, so the property is
//! resolved by a single oldest-to-newest sweep in [`CurrencyRule::setup`] into
//! a table keyed by sorted position. Checks afterwards only read the table.

use tracing::debug;

use super::{acting_as_pic, unless, CurrencyRule};
use crate::criteria::MatchCriteria;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::violation::Violation;
use crate::window::TimeWindow;

const REQUIRED_APPROACHES: u64 = 6;
const REQUIRED_HOLDS: u64 = 1;
const CURRENCY_WINDOW: TimeWindow = TimeWindow::CalendarMonths(6);
const GRACE_WINDOW: TimeWindow = TimeWindow::CalendarMonths(12);

/// IFR as PIC without 6 approaches and a hold in 6 calendar months, or an IPC.
///
/// Flights with a safety pilot aboard (simulated instrument practice) and the
/// IPC itself are exempt.
#[derive(Debug)]
pub struct NoIfrCurrency<'a> {
    index: &'a FlightIndex,
    counts: Vec<Option<bool>>,
}

impl<'a> NoIfrCurrency<'a> {
    /// Rule over `index`; call [`setup`](CurrencyRule::setup) before checking.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self {
            index,
            counts: Vec::new(),
        }
    }

    /// Whether the flight at sorted `position` counts toward the IFR currency
    /// of later flights.
    ///
    /// Served from the setup table; positions the table does not cover are
    /// computed on the spot (recursing only into earlier positions) without
    /// being stored.
    pub fn counts_toward_currency(&self, position: usize) -> bool {
        if let Some(Some(counts)) = self.counts.get(position) {
            return *counts;
        }
        self.evaluate(position, |earlier| self.counts_toward_currency(earlier))
    }

    /// Evaluates one position given an oracle for strictly earlier positions.
    fn evaluate(&self, position: usize, earlier_counts: impl Fn(usize) -> bool) -> bool {
        let Some(flight) = self.index.get(position) else {
            return false;
        };
        if flight.checks.ipc {
            return true;
        }
        if !flight.has_approaches() && !flight.has_holds() {
            return false;
        }

        let mut approaches = 0_u64;
        let mut holds = 0_u64;
        for (i, prior) in
            self.index
                .entries_within(GRACE_WINDOW, flight, MatchCriteria::category(flight))
        {
            if prior.checks.ipc {
                return true;
            }
            if i < position && earlier_counts(i) {
                approaches += u64::from(prior.operations.approaches);
                holds += u64::from(prior.operations.holds);
            }
        }
        approaches >= REQUIRED_APPROACHES && holds >= REQUIRED_HOLDS
    }

    fn contributes(&self, position: usize, flight: &Flight) -> bool {
        (flight.has_approaches() || flight.has_holds() || flight.checks.ipc)
            && self.counts_toward_currency(position)
    }
}

impl CurrencyRule for NoIfrCurrency<'_> {
    fn violation(&self) -> Violation {
        Violation::NoIfrCurrency
    }

    fn setup(&mut self) -> Result<(), ValidationError> {
        let mut counts: Vec<Option<bool>> = vec![None; self.index.len()];
        for position in 0..counts.len() {
            let value = self.evaluate(position, |earlier| counts[earlier].unwrap_or(false));
            counts[position] = Some(value);
        }
        let counting = counts.iter().filter(|c| **c == Some(true)).count();
        debug!(
            flights = counts.len(),
            counting, "IFR grace-period sweep complete"
        );
        self.counts = counts;
        Ok(())
    }

    fn check(&self, flight: &Flight) -> Result<Option<Violation>, ValidationError> {
        if flight.aircraft().is_none() || !acting_as_pic(flight) {
            return Ok(None);
        }
        if !flight.is_ifr() || flight.safety_pilot_onboard() || flight.checks.ipc {
            return Ok(None);
        }

        let mut approaches = 0_u64;
        let mut hold = false;
        for (i, prior) in
            self.index
                .entries_within(CURRENCY_WINDOW, flight, MatchCriteria::category(flight))
        {
            if !self.contributes(i, prior) {
                continue;
            }
            if prior.checks.ipc {
                return Ok(None);
            }
            approaches += u64::from(prior.operations.approaches);
            hold |= prior.has_holds();
        }
        Ok(unless(
            approaches >= REQUIRED_APPROACHES && hold,
            Violation::NoIfrCurrency,
        ))
    }
}
