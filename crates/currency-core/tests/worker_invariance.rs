// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Worker-count invariance: the parallel fan-out reports exactly what the
//! serial baseline reports, for any number of workers.

#![allow(missing_docs)]
#![allow(clippy::expect_used)]

mod common;

use chrono::TimeDelta;
use common::{random_logbook, shuffle, XorShift64, SEEDS, WORKER_COUNTS};
use currency_core::{
    catalogue, execute_parallel, execute_serial, FlightIndex, FlightViolations, Validator,
    ValidatorConfig,
};

fn sorted(mut found: Vec<FlightViolations>) -> Vec<FlightViolations> {
    FlightViolations::sort_by_date(&mut found);
    found
}

#[test]
fn parallel_matches_serial_for_every_worker_count() {
    for &seed in SEEDS {
        let mut rng = XorShift64::new(seed);
        let index = FlightIndex::new(random_logbook(&mut rng, 200)).expect("unique ids");
        let mut rules = catalogue(&index);
        for rule in &mut rules {
            rule.setup().expect("setup");
        }

        let baseline = execute_serial(&rules, index.flights()).expect("serial run");
        assert!(
            !baseline.is_empty(),
            "seed {seed:#x} produced no violations"
        );
        let baseline = sorted(baseline);

        for &workers in WORKER_COUNTS {
            let found = execute_parallel(&rules, index.flights(), workers).expect("parallel run");
            assert_eq!(
                sorted(found),
                baseline,
                "seed {seed:#x}: results differ for {workers} workers"
            );
        }
    }
}

#[test]
fn input_order_does_not_change_the_report() {
    let mut rng = XorShift64::new(0x42);
    let mut flights = random_logbook(&mut rng, 150);
    // Same-instant flights keep their input order, which the IFR sweep sees.
    for (minutes, flight) in (0_i64..).zip(flights.iter_mut()) {
        flight.date += TimeDelta::minutes(minutes);
    }
    let baseline = sorted(
        Validator::new(flights.clone())
            .expect("indexed")
            .violations()
            .expect("run"),
    );

    for &workers in WORKER_COUNTS {
        shuffle(&mut rng, &mut flights);
        let config = ValidatorConfig::with_workers(workers);
        let found = Validator::with_config(flights.clone(), config)
            .expect("indexed")
            .violations()
            .expect("run");
        assert_eq!(sorted(found), baseline, "{workers} workers after shuffle");
    }
}

#[test]
fn each_offending_flight_is_reported_once() {
    let mut rng = XorShift64::new(0xDEAD_BEEF);
    let index = FlightIndex::new(random_logbook(&mut rng, 200)).expect("unique ids");
    let mut rules = catalogue(&index);
    for rule in &mut rules {
        rule.setup().expect("setup");
    }
    let found = execute_parallel(&rules, index.flights(), 8).expect("parallel run");
    let mut ids: Vec<_> = found.iter().map(|entry| entry.flight.id.clone()).collect();
    let reported = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), reported);
    assert!(found.iter().all(|entry| !entry.violations.is_empty()));
}
