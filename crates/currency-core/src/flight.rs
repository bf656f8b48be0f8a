// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flight records.
//!
//! A [`Flight`] is plain data. Everything the rules ask of it beyond raw
//! counters (is this a PIC flight? how many takeoffs in total?) is computed by
//! accessor functions so derived values can never drift from the counters.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::aircraft::Aircraft;

/// Stable identifier of a flight within one logbook.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(String);

impl FlightId {
    /// Wraps a logbook identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logged time, in whole minutes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTimes {
    /// Pilot in command.
    pub pic: u32,
    /// Second in command.
    pub sic: u32,
    /// Night.
    pub night: u32,
    /// Actual instrument conditions.
    pub actual_instrument: u32,
    /// Instruction given.
    pub dual_given: u32,
    /// Instruction received.
    pub dual_received: u32,
    /// Student solo.
    pub solo: u32,
    /// Night vision goggles.
    pub nvg: u32,
}

/// Takeoff, landing, approach and hold counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operations {
    /// Day takeoffs.
    pub day_takeoffs: u32,
    /// Night takeoffs.
    pub night_takeoffs: u32,
    /// Day landings.
    pub day_landings: u32,
    /// Night landings.
    pub night_landings: u32,
    /// Full-stop landings, day or night.
    pub full_stop_landings: u32,
    /// Night full-stop landings.
    pub night_full_stop_landings: u32,
    /// Takeoffs under night vision goggles.
    pub nvg_takeoffs: u32,
    /// Landings under night vision goggles.
    pub nvg_landings: u32,
    /// Instrument approaches flown.
    pub approaches: u32,
    /// Holding procedures flown.
    pub holds: u32,
}

/// Who else was on the flight deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crew {
    /// A pilot in command was recorded.
    pub pic: bool,
    /// A second in command was recorded.
    pub sic: bool,
    /// A safety pilot was aboard for simulated instrument flight.
    pub safety_pilot: bool,
}

/// Checkrides and recurrent events accomplished on the flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checks {
    /// FAR 61.56 flight review.
    pub flight_review: bool,
    /// Practical test.
    pub checkride: bool,
    /// FAR 61.57(d) instrument proficiency check.
    pub ipc: bool,
    /// FAR 61.58 proficiency check.
    pub proficiency_check: bool,
    /// FAR 61.31(k) NVG proficiency check.
    pub nvg_proficiency_check: bool,
}

/// One logbook entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Identifier, unique within the logbook.
    pub id: FlightId,
    /// Airframe flown; `None` when the logbook entry has no resolvable aircraft.
    pub aircraft: Option<Arc<Aircraft>>,
    /// Local date and time of the flight.
    pub date: NaiveDateTime,
    /// Departure identifier.
    pub origin: Option<String>,
    /// Arrival identifier.
    pub destination: Option<String>,
    /// Crew presence.
    pub crew: Crew,
    /// Passengers aboard.
    pub passengers: u32,
    /// Logged time.
    pub times: FlightTimes,
    /// Takeoffs, landings, approaches and holds.
    pub operations: Operations,
    /// Checks accomplished.
    pub checks: Checks,
    /// Free-form remarks.
    pub remarks: Option<String>,
}

impl Flight {
    /// An empty flight with all counters zeroed and no aircraft.
    pub fn new(id: FlightId, date: NaiveDateTime) -> Self {
        Self {
            id,
            aircraft: None,
            date,
            origin: None,
            destination: None,
            crew: Crew::default(),
            passengers: 0,
            times: FlightTimes::default(),
            operations: Operations::default(),
            checks: Checks::default(),
            remarks: None,
        }
    }

    /// Airframe flown, if resolved.
    pub fn aircraft(&self) -> Option<&Aircraft> {
        self.aircraft.as_deref()
    }

    /// PIC time was logged.
    pub fn is_pic(&self) -> bool {
        self.times.pic > 0
    }

    /// SIC time was logged.
    pub fn is_sic(&self) -> bool {
        self.times.sic > 0
    }

    /// Instruction was received (the instructor is the acting PIC).
    pub fn is_dual_received(&self) -> bool {
        self.times.dual_received > 0
    }

    /// Instruction was given.
    pub fn is_dual_given(&self) -> bool {
        self.times.dual_given > 0
    }

    /// Student pilot solo.
    pub fn is_student_solo(&self) -> bool {
        self.times.solo > 0
    }

    /// Any night time.
    pub fn is_night(&self) -> bool {
        self.times.night > 0
    }

    /// Any actual instrument time.
    pub fn is_ifr(&self) -> bool {
        self.times.actual_instrument > 0
    }

    /// Any passengers.
    pub fn has_passengers(&self) -> bool {
        self.passengers > 0
    }

    /// Any approaches.
    pub fn has_approaches(&self) -> bool {
        self.operations.approaches > 0
    }

    /// Any holds.
    pub fn has_holds(&self) -> bool {
        self.operations.holds > 0
    }

    /// Any NVG takeoff or landing.
    pub fn used_nvg(&self) -> bool {
        self.operations.nvg_takeoffs > 0 || self.operations.nvg_landings > 0
    }

    /// Safety pilot aboard.
    pub fn safety_pilot_onboard(&self) -> bool {
        self.crew.safety_pilot
    }

    /// Day plus night takeoffs, widened so any pair of counters fits.
    pub fn total_takeoffs(&self) -> u64 {
        u64::from(self.operations.day_takeoffs) + u64::from(self.operations.night_takeoffs)
    }

    /// Day plus night landings, widened like [`Self::total_takeoffs`].
    pub fn total_landings(&self) -> u64 {
        u64::from(self.operations.day_landings) + u64::from(self.operations.night_landings)
    }

    /// Flown in a conventional-gear airframe.
    pub fn is_tailwheel(&self) -> bool {
        self.aircraft().is_some_and(|a| a.tailwheel)
    }

    /// Type designator of the airframe, if resolved.
    pub fn type_designator(&self) -> Option<&str> {
        self.aircraft().map(|a| a.aircraft_type.designator.as_str())
    }

    /// PIC time in hours.
    pub fn pic_hours(&self) -> f64 {
        minutes_to_hours(self.times.pic)
    }

    /// Dual-given time in hours.
    pub fn dual_given_hours(&self) -> f64 {
        minutes_to_hours(self.times.dual_given)
    }
}

fn minutes_to_hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use chrono::NaiveDate;

    fn flight() -> Flight {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid date");
        Flight::new(FlightId::new("f1"), date)
    }

    #[test]
    fn derived_flags_follow_counters() {
        let mut f = flight();
        assert!(!f.is_pic());
        assert!(!f.used_nvg());
        f.times.pic = 90;
        f.times.dual_given = 45;
        f.operations.nvg_landings = 1;
        assert!(f.is_pic());
        assert!(f.is_dual_given());
        assert!(f.used_nvg());
        assert!((f.pic_hours() - 1.5).abs() < f64::EPSILON);
        assert!((f.dual_given_hours() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn totals_add_day_and_night() {
        let mut f = flight();
        f.operations.day_takeoffs = 2;
        f.operations.night_takeoffs = 1;
        f.operations.day_landings = 1;
        f.operations.night_landings = 3;
        assert_eq!(f.total_takeoffs(), 3);
        assert_eq!(f.total_landings(), 4);
    }

    #[test]
    fn totals_do_not_overflow_the_counters() {
        let mut f = flight();
        f.operations.day_takeoffs = u32::MAX;
        f.operations.night_takeoffs = 1;
        f.operations.day_landings = u32::MAX;
        f.operations.night_landings = u32::MAX;
        assert_eq!(f.total_takeoffs(), u64::from(u32::MAX) + 1);
        assert_eq!(f.total_landings(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn no_aircraft_is_not_tailwheel() {
        let f = flight();
        assert!(!f.is_tailwheel());
        assert_eq!(f.type_designator(), None);
    }
}
