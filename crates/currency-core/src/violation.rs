// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Violation kinds and the per-flight report entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flight::Flight;

/// A currency regulation a flight was found to contravene.
///
/// The catalogue is closed: one variant per rule in
/// [`catalogue`](crate::rules::catalogue).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Violation {
    /// No flight review or checkride in the preceding 24 calendar months.
    #[serde(rename = "no_flight_review")]
    NoFlightReview,
    /// Passengers carried without 3 takeoffs and landings in 90 days.
    #[serde(rename = "no_passenger_currency")]
    NoPassengerCurrency,
    /// Passengers carried at night without 3 night takeoffs and full-stop landings.
    #[serde(rename = "no_night_passenger_currency")]
    NoNightPassengerCurrency,
    /// IFR without 6 approaches and a hold in 6 calendar months, or an IPC.
    #[serde(rename = "no_ifr_currency")]
    NoIfrCurrency,
    /// Type-rated aircraft without a FAR 61.58 check in 12 calendar months.
    #[serde(rename = "no_proficiency_check")]
    NoProficiencyCheck,
    /// Type-rated aircraft without a FAR 61.58 check in type in 24 calendar months.
    #[serde(rename = "no_proficiency_check_in_type")]
    NoProficiencyCheckInType,
    /// NVG operations without NVG currency.
    #[serde(rename = "no_nvg_currency")]
    NoNvgCurrency,
    /// NVG operations with passengers without NVG passenger currency.
    #[serde(rename = "no_nvg_passenger_currency")]
    NoNvgPassengerCurrency,
    /// More than 8 hours of instruction given in 24 hours.
    #[serde(rename = "dual_given_8_in_24")]
    DualGiven8In24,
    /// Instruction given without 5 hours PIC in the make and model.
    #[serde(rename = "dual_given_time_in_type")]
    DualGivenTimeInType,
    /// Acted as SIC in a type-rated aircraft without 3 takeoffs and landings in type.
    #[serde(rename = "no_sic_currency")]
    NoSicCurrency,
}

impl Violation {
    /// Every violation kind, in catalogue order.
    pub const ALL: [Self; 11] = [
        Self::NoFlightReview,
        Self::NoPassengerCurrency,
        Self::NoNightPassengerCurrency,
        Self::NoIfrCurrency,
        Self::NoProficiencyCheck,
        Self::NoProficiencyCheckInType,
        Self::NoNvgCurrency,
        Self::NoNvgPassengerCurrency,
        Self::DualGiven8In24,
        Self::DualGivenTimeInType,
        Self::NoSicCurrency,
    ];

    /// Stable machine-readable code (matches the serde representation).
    pub fn code(self) -> &'static str {
        match self {
            Self::NoFlightReview => "no_flight_review",
            Self::NoPassengerCurrency => "no_passenger_currency",
            Self::NoNightPassengerCurrency => "no_night_passenger_currency",
            Self::NoIfrCurrency => "no_ifr_currency",
            Self::NoProficiencyCheck => "no_proficiency_check",
            Self::NoProficiencyCheckInType => "no_proficiency_check_in_type",
            Self::NoNvgCurrency => "no_nvg_currency",
            Self::NoNvgPassengerCurrency => "no_nvg_passenger_currency",
            Self::DualGiven8In24 => "dual_given_8_in_24",
            Self::DualGivenTimeInType => "dual_given_time_in_type",
            Self::NoSicCurrency => "no_sic_currency",
        }
    }

    /// The 14 CFR paragraph the rule implements.
    pub fn regulation(self) -> &'static str {
        match self {
            Self::NoFlightReview => "61.56(c)",
            Self::NoPassengerCurrency => "61.57(a)",
            Self::NoNightPassengerCurrency => "61.57(b)",
            Self::NoIfrCurrency => "61.57(c)",
            Self::NoProficiencyCheck => "61.58(a)(1)",
            Self::NoProficiencyCheckInType => "61.58(a)(2)",
            Self::NoNvgCurrency | Self::NoNvgPassengerCurrency => "61.57(f)",
            Self::DualGiven8In24 => "61.195(a)",
            Self::DualGivenTimeInType => "61.195(f)",
            Self::NoSicCurrency => "61.55(b)",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::NoFlightReview => "Flight review not accomplished within prior 24 calendar months",
            Self::NoPassengerCurrency => {
                "Carried passengers without having completed required takeoffs and landings"
            }
            Self::NoNightPassengerCurrency => {
                "Carried passengers at night without having completed required takeoffs and landings"
            }
            Self::NoIfrCurrency => {
                "Flew under IFR without having completed required approaches/holds or IPC"
            }
            Self::NoProficiencyCheck => {
                "Flew a type-rated aircraft without having completed a FAR 61.58 check"
            }
            Self::NoProficiencyCheckInType => {
                "Flew a type-rated aircraft without having completed a FAR 61.58 check in type"
            }
            Self::NoNvgCurrency => {
                "Made a takeoff or landing under NVGs without the required NVG takeoffs and landings or proficiency check"
            }
            Self::NoNvgPassengerCurrency => {
                "Made a takeoff or landing under NVGs with passengers without the required NVG takeoffs and landings or proficiency check"
            }
            Self::DualGiven8In24 => "Exceeded maximum 8 hours of dual given in a 24-hour period",
            Self::DualGivenTimeInType => {
                "Gave training in a multi-engine, helicopter, or powered-lift aircraft without having 5 hours in type"
            }
            Self::NoSicCurrency => {
                "Acted as SIC in type-rated aircraft without required takeoffs and landings"
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.description(), self.regulation())
    }
}

/// A flight paired with every violation found on it (never empty).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightViolations {
    /// The offending flight.
    pub flight: Flight,
    /// Violations in catalogue order.
    pub violations: Vec<Violation>,
}

impl FlightViolations {
    /// Sorts a validator result chronologically (ties broken by flight id).
    ///
    /// The validator itself makes no ordering promise.
    pub fn sort_by_date(list: &mut [Self]) {
        list.sort_by(|a, b| {
            a.flight
                .date
                .cmp(&b.flight.date)
                .then_with(|| a.flight.id.cmp(&b.flight.id))
        });
    }
}
