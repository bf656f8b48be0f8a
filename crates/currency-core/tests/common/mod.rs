// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Days, NaiveDateTime};
use currency_core::{Aircraft, Flight, SimulatedCategoryClass};
use currency_dry_tests::{
    at, baron, boeing_737, cessna_172, full_flight_simulator, piper_cub, robinson_r44,
    training_device, FlightBuilder,
};
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

/// Worker counts every parallel test sweeps.
pub const WORKER_COUNTS: &[usize] = &[1, 2, 3, 4, 8, 16];

/// Seeds for randomized logbooks.
pub const SEEDS: &[u64] = &[0x1, 0x42, 0xDEAD_BEEF, 0x0123_4567_89AB_CDEF];

/// Tiny deterministic RNG (xorshift64*) so tests don't need `rand`.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Zero seeds are replaced with 1 (xorshift would stay at zero forever).
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Value in `[0, upper)`; modulo bias is fine for tests.
    pub fn below(&mut self, upper: u64) -> u64 {
        if upper <= 1 {
            return 0;
        }
        self.next_u64() % upper
    }

    pub fn below_u32(&mut self, upper: u32) -> u32 {
        u32::try_from(self.below(u64::from(upper))).unwrap_or(0)
    }

    pub fn chance(&mut self, one_in: u64) -> bool {
        self.below(one_in) == 0
    }
}

/// Fisher–Yates shuffle (deterministic).
pub fn shuffle<T>(rng: &mut XorShift64, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = usize::try_from(rng.below(i as u64 + 1)).unwrap_or(0);
        items.swap(i, j);
    }
}

/// Proptest runner with a committed seed so failures reproduce everywhere.
pub fn pinned_runner(cases: u32) -> TestRunner {
    const SEED_BYTES: [u8; 32] = [
        0x42, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(
        PropConfig {
            cases,
            ..PropConfig::default()
        },
        rng,
    )
}

/// Every preset, including one FFS and one FTD.
pub fn fleet() -> Vec<Arc<Aircraft>> {
    vec![
        cessna_172(),
        piper_cub(),
        baron(),
        boeing_737(),
        robinson_r44(),
        full_flight_simulator("B738", SimulatedCategoryClass::Amel),
        training_device("C172", SimulatedCategoryClass::Asel),
    ]
}

/// A pseudo-random logbook spanning roughly two years.
///
/// Dates are drawn from two fixed times of day so that equal timestamps are
/// common; a small share of flights carry no aircraft.
pub fn random_logbook(rng: &mut XorShift64, len: usize) -> Vec<Flight> {
    let fleet = fleet();
    let origin = at(2023, 1, 1, 8, 0);
    (0..len)
        .map(|i| {
            let date = random_date(rng, origin);
            let mut builder = FlightBuilder::new(&format!("f{i:04}"), date);
            if !rng.chance(12) {
                let pick = usize::try_from(rng.below(fleet.len() as u64)).unwrap_or(0);
                builder = builder.aircraft(&fleet[pick]);
            }
            builder = if rng.chance(4) {
                builder.dual_received(60 + rng.below_u32(60))
            } else {
                builder.pic(30 + rng.below_u32(300))
            };
            if rng.chance(5) {
                builder = builder.sic(60 + rng.below_u32(120));
            }
            if rng.chance(3) {
                builder = builder.passengers(1 + rng.below_u32(3));
            }
            if rng.chance(3) {
                builder = builder.night(30).night_landings(rng.below_u32(4));
            }
            if rng.chance(3) {
                builder = builder
                    .actual_instrument(30 + rng.below_u32(60))
                    .approaches(rng.below_u32(5))
                    .holds(rng.below_u32(2));
            }
            if rng.chance(6) {
                builder = builder.dual_given(60 + rng.below_u32(300));
            }
            if rng.chance(8) {
                builder = builder.nvg(rng.below_u32(4), rng.below_u32(4));
            }
            if rng.chance(10) {
                builder = builder.safety_pilot();
            }
            if rng.chance(20) {
                builder = builder.ipc();
            }
            if rng.chance(20) {
                builder = builder.flight_review();
            }
            if rng.chance(20) {
                builder = builder.proficiency_check();
            }
            if rng.chance(25) {
                builder = builder.nvg_proficiency_check();
            }
            builder.day_landings(rng.below_u32(4)).build()
        })
        .collect()
}

fn random_date(rng: &mut XorShift64, origin: NaiveDateTime) -> NaiveDateTime {
    let day = origin + Days::new(rng.below(730));
    if rng.chance(2) {
        day
    } else {
        day + chrono::TimeDelta::hours(6)
    }
}

/// Identifiers in result order.
pub fn ids<'a>(flights: impl IntoIterator<Item = &'a Flight>) -> Vec<String> {
    flights.into_iter().map(|f| f.id.to_string()).collect()
}
