// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Aircraft and aircraft-type records.
//!
//! Classification follows 14 CFR 1.1 (category / class) plus the logbook's own
//! device categories for simulators and training devices. Every enum can be
//! parsed from the logbook's raw code strings via `from_code`; an unknown code
//! yields `None` and the ingestion layer turns that into a fatal
//! [`ClassificationError`](crate::ClassificationError).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Gross weight (lbs) at or above which an aircraft requires a type rating.
pub(crate) const TYPE_RATING_WEIGHT_LBS: f64 = 12_500.0;

/// FAA aircraft category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Engine-driven, fixed-wing, heavier than air.
    Airplane,
    /// Heavier than air, lift from rotating wings.
    Rotorcraft,
    /// Vertical takeoff and landing with wing-borne cruise.
    PoweredLift,
    /// Heavier than air, no engine dependency.
    Glider,
    /// Balloons and airships.
    LighterThanAir,
    /// Simulator of any fidelity (see [`SimulatorKind`]).
    Simulator,
    /// Flight training device.
    TrainingDevice,
    /// Personal-computer aviation training device.
    PcAtd,
    /// Powered parachute.
    PoweredParachute,
    /// Weight-shift-control ("trike").
    WeightShiftControl,
    /// Unmanned aircraft.
    Uav,
    /// Anything else.
    Other,
}

impl Category {
    /// Parses a logbook category code (`flight_category1` … `flight_category12`).
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "flight_category1" => Self::Airplane,
            "flight_category2" => Self::Rotorcraft,
            "flight_category3" => Self::PoweredLift,
            "flight_category4" => Self::Glider,
            "flight_category5" => Self::LighterThanAir,
            "flight_category6" => Self::Simulator,
            "flight_category7" => Self::TrainingDevice,
            "flight_category8" => Self::PcAtd,
            "flight_category9" => Self::PoweredParachute,
            "flight_category10" => Self::WeightShiftControl,
            "flight_category11" => Self::Uav,
            "flight_category12" => Self::Other,
            _ => return None,
        })
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Airplane => "Airplane",
            Self::Rotorcraft => "Rotorcraft",
            Self::PoweredLift => "Powered Lift",
            Self::Glider => "Glider",
            Self::LighterThanAir => "Lighter-Than-Air",
            Self::Simulator => "Simulator",
            Self::TrainingDevice => "Training Device",
            Self::PcAtd => "PC-ATD",
            Self::PoweredParachute => "Powered Parachute",
            Self::WeightShiftControl => "Weight-Shift-Control",
            Self::Uav => "UAV",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// FAA aircraft class within a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    /// Multi-engine land.
    MultiEngineLand,
    /// Single-engine land.
    SingleEngineLand,
    /// Multi-engine sea.
    MultiEngineSea,
    /// Single-engine sea.
    SingleEngineSea,
    /// Unspecified.
    Other,
    /// Rotorcraft with an unpowered rotor.
    Gyroplane,
    /// Powered lighter-than-air.
    Airship,
    /// Unpowered lighter-than-air.
    FreeBalloon,
    /// Rotorcraft with a powered rotor.
    Helicopter,
}

impl Class {
    /// Parses a logbook class code (`flight_aircraftClass1` … `flight_aircraftClass9`).
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "flight_aircraftClass1" => Self::MultiEngineLand,
            "flight_aircraftClass2" => Self::SingleEngineLand,
            "flight_aircraftClass3" => Self::MultiEngineSea,
            "flight_aircraftClass4" => Self::SingleEngineSea,
            "flight_aircraftClass5" => Self::Other,
            "flight_aircraftClass6" => Self::Gyroplane,
            "flight_aircraftClass7" => Self::Airship,
            "flight_aircraftClass8" => Self::FreeBalloon,
            "flight_aircraftClass9" => Self::Helicopter,
            _ => return None,
        })
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MultiEngineLand => "Multi-Engine Land",
            Self::SingleEngineLand => "Single-Engine Land",
            Self::MultiEngineSea => "Multi-Engine Sea",
            Self::SingleEngineSea => "Single-Engine Sea",
            Self::Other => "Other",
            Self::Gyroplane => "Gyroplane",
            Self::Airship => "Airship",
            Self::FreeBalloon => "Free Balloon",
            Self::Helicopter => "Helicopter",
        }
    }

    /// Whether this class may be paired with `category`.
    ///
    /// Categories without FAA classes (gliders, devices, …) accept any class;
    /// `Other` is accepted everywhere.
    pub fn is_valid_for(self, category: Category) -> bool {
        match (category, self) {
            (_, Self::Other) => true,
            (Category::Airplane, class) => class.is_multi_engine() || class.is_single_engine(),
            (Category::Rotorcraft, class) => matches!(class, Self::Helicopter | Self::Gyroplane),
            (Category::LighterThanAir, class) => matches!(class, Self::Airship | Self::FreeBalloon),
            _ => true,
        }
    }

    /// Multi-engine land or sea.
    pub fn is_multi_engine(self) -> bool {
        matches!(self, Self::MultiEngineLand | Self::MultiEngineSea)
    }

    fn is_single_engine(self) -> bool {
        matches!(self, Self::SingleEngineLand | Self::SingleEngineSea)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Installed powerplant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    /// Turbojet.
    Jet,
    /// Generic turbine.
    Turbine,
    /// Turboprop.
    Turboprop,
    /// Piston.
    Reciprocating,
    /// No engine.
    NonPowered,
    /// Turboshaft.
    Turboshaft,
    /// Turbofan.
    Turbofan,
    /// Ramjet.
    Ramjet,
    /// Two-stroke piston.
    TwoCycle,
    /// Four-stroke piston.
    FourCycle,
    /// Unspecified.
    Other,
    /// Electric motor.
    Electric,
}

impl EngineType {
    /// Parses a logbook engine code (`flight_engineType1` … `flight_engineType12`).
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "flight_engineType1" => Self::Jet,
            "flight_engineType2" => Self::Turbine,
            "flight_engineType3" => Self::Turboprop,
            "flight_engineType4" => Self::Reciprocating,
            "flight_engineType5" => Self::NonPowered,
            "flight_engineType6" => Self::Turboshaft,
            "flight_engineType7" => Self::Turbofan,
            "flight_engineType8" => Self::Ramjet,
            "flight_engineType9" => Self::TwoCycle,
            "flight_engineType10" => Self::FourCycle,
            "flight_engineType11" => Self::Other,
            "flight_engineType12" => Self::Electric,
            _ => return None,
        })
    }

    /// Turbine-class engines: jet, turbine, turboprop, turboshaft, turbofan, ramjet.
    pub fn is_turbine(self) -> bool {
        matches!(
            self,
            Self::Jet
                | Self::Turbine
                | Self::Turboprop
                | Self::Turboshaft
                | Self::Turbofan
                | Self::Ramjet
        )
    }
}

/// Fidelity level of a simulation device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulatorKind {
    /// Basic aviation training device.
    #[serde(rename = "BATD")]
    Batd,
    /// Advanced aviation training device.
    #[serde(rename = "AATD")]
    Aatd,
    /// Flight training device.
    #[serde(rename = "FTD")]
    Ftd,
    /// Full flight simulator; the only kind that earns aircraft-equivalent credit.
    #[serde(rename = "FFS")]
    Ffs,
}

impl SimulatorKind {
    /// Parses `BATD`, `AATD`, `FTD` or `FFS`.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "BATD" => Self::Batd,
            "AATD" => Self::Aatd,
            "FTD" => Self::Ftd,
            "FFS" => Self::Ffs,
            _ => return None,
        })
    }
}

/// Category and class a simulation device represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulatedCategoryClass {
    /// Airplane single-engine land.
    #[serde(rename = "ASEL")]
    Asel,
    /// Airplane single-engine sea.
    #[serde(rename = "ASES")]
    Ases,
    /// Airplane multi-engine land.
    #[serde(rename = "AMEL")]
    Amel,
    /// Airplane multi-engine sea.
    #[serde(rename = "AMES")]
    Ames,
    /// Glider.
    #[serde(rename = "GL")]
    Glider,
}

impl SimulatedCategoryClass {
    /// Parses `ASEL`, `ASES`, `AMEL`, `AMES` or `GL`.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "ASEL" => Self::Asel,
            "ASES" => Self::Ases,
            "AMEL" => Self::Amel,
            "AMES" => Self::Ames,
            "GL" => Self::Glider,
            _ => return None,
        })
    }

    /// Simulated category.
    pub fn category(self) -> Category {
        match self {
            Self::Asel | Self::Ases | Self::Amel | Self::Ames => Category::Airplane,
            Self::Glider => Category::Glider,
        }
    }

    /// Simulated class; gliders have none.
    pub fn class(self) -> Option<Class> {
        match self {
            Self::Asel => Some(Class::SingleEngineLand),
            Self::Ases => Some(Class::SingleEngineSea),
            Self::Amel => Some(Class::MultiEngineLand),
            Self::Ames => Some(Class::MultiEngineSea),
            Self::Glider => None,
        }
    }
}

/// Make and model shared by every airframe of that type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    /// Logbook identifier of the type record.
    pub id: String,
    /// Type designator, e.g. `C172` or `B738`. For devices, the simulated type.
    pub designator: String,
    /// FAA category.
    pub category: Category,
    /// FAA class, when the category has one.
    pub class: Option<Class>,
    /// Powerplant.
    pub engine_type: Option<EngineType>,
    /// Device fidelity for simulators and training devices.
    pub simulator: Option<SimulatorKind>,
    /// Category and class a device represents.
    pub simulated: Option<SimulatedCategoryClass>,
}

impl AircraftType {
    /// A real aircraft type with no device attributes.
    pub fn new(
        id: impl Into<String>,
        designator: impl Into<String>,
        category: Category,
        class: Option<Class>,
    ) -> Self {
        Self {
            id: id.into(),
            designator: designator.into(),
            category,
            class,
            engine_type: None,
            simulator: None,
            simulated: None,
        }
    }

    /// True for a simulator-category device of FFS fidelity.
    pub fn is_full_flight_simulator(&self) -> bool {
        self.category == Category::Simulator && self.simulator == Some(SimulatorKind::Ffs)
    }

    /// Category a device simulates, if any.
    pub fn simulated_category(&self) -> Option<Category> {
        self.simulated.map(SimulatedCategoryClass::category)
    }

    /// Class a device simulates, if any.
    pub fn simulated_class(&self) -> Option<Class> {
        self.simulated.and_then(SimulatedCategoryClass::class)
    }

    /// Category used when comparing experience across devices: a simulator
    /// stands in for the category it represents.
    pub fn effective_category(&self) -> Option<Category> {
        if self.category == Category::Simulator {
            self.simulated_category()
        } else {
            Some(self.category)
        }
    }
}

/// A specific airframe, identified by registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Registration (tail number).
    pub registration: String,
    /// Shared type record.
    pub aircraft_type: Arc<AircraftType>,
    /// Maximum gross weight in pounds, if known.
    pub weight: Option<f64>,
    /// Conventional gear.
    pub tailwheel: bool,
}

impl Aircraft {
    /// New airframe with no weight and tricycle gear.
    pub fn new(registration: impl Into<String>, aircraft_type: Arc<AircraftType>) -> Self {
        Self {
            registration: registration.into(),
            aircraft_type,
            weight: None,
            tailwheel: false,
        }
    }

    /// Powered-lift, turbine-powered, or at least 12,500 lbs gross weight.
    pub fn requires_type_rating(&self) -> bool {
        self.aircraft_type.category == Category::PoweredLift
            || self.is_turbine_powered()
            || self.weight.is_some_and(|w| w >= TYPE_RATING_WEIGHT_LBS)
    }

    /// Turbine-class powerplant installed.
    pub fn is_turbine_powered(&self) -> bool {
        self.aircraft_type
            .engine_type
            .is_some_and(EngineType::is_turbine)
    }
}
