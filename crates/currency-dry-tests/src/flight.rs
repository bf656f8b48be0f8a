// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flight construction for tests.
//!
//! # Example
//!
//! ```
//! use currency_dry_tests::{at, cessna_172, FlightBuilder};
//!
//! let flight = FlightBuilder::new("f1", at(2024, 3, 15, 9, 30))
//!     .aircraft(&cessna_172())
//!     .pic(90)
//!     .day_landings(3)
//!     .passengers(2)
//!     .build();
//! assert_eq!(flight.total_takeoffs(), 3);
//! ```

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use currency_core::{Aircraft, Flight, FlightId};

/// Local date-time shorthand.
///
/// # Panics
///
/// Panics on an impossible date or time; fixtures are expected to be valid.
#[allow(clippy::expect_used)]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("fixture date must be valid")
}

/// Builder for [`Flight`] in tests.
///
/// Minute setters also flip the matching crew flag where one exists. Counter
/// setters add to what is already there, so calls compose.
#[derive(Debug, Clone)]
pub struct FlightBuilder {
    flight: Flight,
}

impl FlightBuilder {
    /// Empty flight with no aircraft.
    pub fn new(id: &str, date: NaiveDateTime) -> Self {
        Self {
            flight: Flight::new(FlightId::new(id), date),
        }
    }

    /// Airframe flown.
    pub fn aircraft(mut self, aircraft: &Arc<Aircraft>) -> Self {
        self.flight.aircraft = Some(Arc::clone(aircraft));
        self
    }

    /// PIC minutes.
    pub fn pic(mut self, minutes: u32) -> Self {
        self.flight.times.pic = minutes;
        self.flight.crew.pic = true;
        self
    }

    /// SIC minutes.
    pub fn sic(mut self, minutes: u32) -> Self {
        self.flight.times.sic = minutes;
        self.flight.crew.sic = true;
        self
    }

    /// Night minutes.
    pub fn night(mut self, minutes: u32) -> Self {
        self.flight.times.night = minutes;
        self
    }

    /// Actual instrument minutes.
    pub fn actual_instrument(mut self, minutes: u32) -> Self {
        self.flight.times.actual_instrument = minutes;
        self
    }

    /// Instruction-given minutes.
    pub fn dual_given(mut self, minutes: u32) -> Self {
        self.flight.times.dual_given = minutes;
        self
    }

    /// Instruction-received minutes.
    pub fn dual_received(mut self, minutes: u32) -> Self {
        self.flight.times.dual_received = minutes;
        self
    }

    /// Student solo minutes.
    pub fn solo(mut self, minutes: u32) -> Self {
        self.flight.times.solo = minutes;
        self
    }

    /// Passengers aboard.
    pub fn passengers(mut self, count: u32) -> Self {
        self.flight.passengers = count;
        self
    }

    /// Day takeoffs each followed by a full-stop landing.
    pub fn day_landings(mut self, count: u32) -> Self {
        let ops = &mut self.flight.operations;
        ops.day_takeoffs += count;
        ops.day_landings += count;
        ops.full_stop_landings += count;
        self
    }

    /// Day touch-and-go circuits (takeoff and landing, no full stop).
    pub fn touch_and_goes(mut self, count: u32) -> Self {
        let ops = &mut self.flight.operations;
        ops.day_takeoffs += count;
        ops.day_landings += count;
        self
    }

    /// Night takeoffs each followed by a night full-stop landing.
    pub fn night_landings(mut self, count: u32) -> Self {
        let ops = &mut self.flight.operations;
        ops.night_takeoffs += count;
        ops.night_landings += count;
        ops.night_full_stop_landings += count;
        ops.full_stop_landings += count;
        self
    }

    /// NVG takeoffs and landings.
    pub fn nvg(mut self, takeoffs: u32, landings: u32) -> Self {
        self.flight.operations.nvg_takeoffs += takeoffs;
        self.flight.operations.nvg_landings += landings;
        self
    }

    /// Instrument approaches.
    pub fn approaches(mut self, count: u32) -> Self {
        self.flight.operations.approaches += count;
        self
    }

    /// Holding procedures.
    pub fn holds(mut self, count: u32) -> Self {
        self.flight.operations.holds += count;
        self
    }

    /// Safety pilot aboard.
    pub fn safety_pilot(mut self) -> Self {
        self.flight.crew.safety_pilot = true;
        self
    }

    /// Flight review accomplished.
    pub fn flight_review(mut self) -> Self {
        self.flight.checks.flight_review = true;
        self
    }

    /// Practical test.
    pub fn checkride(mut self) -> Self {
        self.flight.checks.checkride = true;
        self
    }

    /// Instrument proficiency check.
    pub fn ipc(mut self) -> Self {
        self.flight.checks.ipc = true;
        self
    }

    /// FAR 61.58 proficiency check.
    pub fn proficiency_check(mut self) -> Self {
        self.flight.checks.proficiency_check = true;
        self
    }

    /// NVG proficiency check.
    pub fn nvg_proficiency_check(mut self) -> Self {
        self.flight.checks.nvg_proficiency_check = true;
        self
    }

    /// Finished flight.
    pub fn build(self) -> Flight {
        self.flight
    }
}
