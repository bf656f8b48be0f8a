// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Validation orchestrator.
//!
//! A run has two phases. Setup builds the rule catalogue and runs every rule's
//! [`setup`](CurrencyRule::setup) sequentially; only then are the rules shared
//! read-only with the workers, which claim flights one at a time from an
//! atomic counter and run every rule against each.
//!
//! # Failure
//!
//! The first rule error stops all workers from claiming further flights and is
//! returned in place of any result. Output order is unspecified; see
//! [`FlightViolations::sort_by_date`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tracing::{field, info, instrument, Span};

use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::flight::Flight;
use crate::index::FlightIndex;
use crate::rules::{catalogue, CurrencyRule};
use crate::violation::FlightViolations;

/// Validates `flights` with the default configuration.
pub fn validate(flights: Vec<Flight>) -> Result<Vec<FlightViolations>, ValidationError> {
    Validator::new(flights)?.violations()
}

/// A logbook ready to be validated.
#[derive(Debug)]
pub struct Validator {
    index: FlightIndex,
    config: ValidatorConfig,
}

impl Validator {
    /// Indexes `flights` with the default configuration.
    pub fn new(flights: Vec<Flight>) -> Result<Self, ValidationError> {
        Self::with_config(flights, ValidatorConfig::default())
    }

    /// Indexes `flights` with an explicit configuration.
    pub fn with_config(
        flights: Vec<Flight>,
        config: ValidatorConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            index: FlightIndex::new(flights)?,
            config,
        })
    }

    /// The sorted flights under validation.
    pub fn index(&self) -> &FlightIndex {
        &self.index
    }

    /// Every flight with at least one violation, paired with its violations in
    /// catalogue order.
    #[instrument(skip(self), fields(flights = self.index.len(), workers = field::Empty))]
    pub fn violations(&self) -> Result<Vec<FlightViolations>, ValidationError> {
        let mut rules = catalogue(&self.index);
        for rule in &mut rules {
            rule.setup()?;
        }

        let workers = self.config.effective_workers(self.index.len());
        Span::current().record("workers", workers);

        let flights = self.index.flights();
        let found = if workers <= 1 {
            execute_serial(&rules, flights)?
        } else {
            execute_parallel(&rules, flights, workers)?
        };
        info!(
            flights = flights.len(),
            offending = found.len(),
            "validation complete"
        );
        Ok(found)
    }
}

/// Runs every rule against one flight.
fn check_flight(
    rules: &[Box<dyn CurrencyRule + '_>],
    flight: &Flight,
) -> Result<Option<FlightViolations>, ValidationError> {
    let mut violations = Vec::new();
    for rule in rules {
        if let Some(violation) = rule.check(flight)? {
            violations.push(violation);
        }
    }
    Ok((!violations.is_empty()).then(|| FlightViolations {
        flight: flight.clone(),
        violations,
    }))
}

/// Serial execution baseline, in flight order.
///
/// `rules` must already be set up.
pub fn execute_serial(
    rules: &[Box<dyn CurrencyRule + '_>],
    flights: &[Flight],
) -> Result<Vec<FlightViolations>, ValidationError> {
    let mut found = Vec::new();
    for flight in flights {
        if let Some(entry) = check_flight(rules, flight)? {
            found.push(entry);
        }
    }
    Ok(found)
}

/// Parallel execution over `workers` scoped threads.
///
/// Workers claim flights via an atomic counter. On the first error every
/// worker stops claiming; errors are reported in worker join order, and a
/// panicking worker becomes [`ValidationError::WorkerPanicked`].
///
/// `rules` must already be set up. A `workers` of zero is treated as one.
pub fn execute_parallel(
    rules: &[Box<dyn CurrencyRule + '_>],
    flights: &[Flight],
    workers: usize,
) -> Result<Vec<FlightViolations>, ValidationError> {
    let workers = workers.max(1);
    let next_flight = AtomicUsize::new(0);
    let abort = AtomicBool::new(false);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let next_flight = &next_flight;
                let abort = &abort;

                s.spawn(move || {
                    let mut found = Vec::new();
                    while !abort.load(Ordering::Relaxed) {
                        let i = next_flight.fetch_add(1, Ordering::Relaxed);
                        let Some(flight) = flights.get(i) else {
                            break;
                        };
                        match check_flight(rules, flight) {
                            Ok(Some(entry)) => found.push(entry),
                            Ok(None) => {}
                            Err(err) => {
                                abort.store(true, Ordering::Relaxed);
                                return Err(err);
                            }
                        }
                    }
                    Ok(found)
                })
            })
            .collect();

        let mut found = Vec::new();
        let mut first_error = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(entries)) => found.extend(entries),
                Ok(Err(err)) => {
                    first_error.get_or_insert(err);
                }
                Err(_) => {
                    abort.store(true, Ordering::Relaxed);
                    first_error.get_or_insert(ValidationError::WorkerPanicked);
                }
            }
        }
        first_error.map_or(Ok(found), Err)
    })
}
