// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Logbook record ingestion.
//!
//! The logbook reader hands over flat records whose aircraft classification is
//! still in the logbook's raw code strings (`flight_category1`,
//! `flight_aircraftClass2`, `FFS`, …). [`Logbook::resolve`] turns them into
//! the typed [`Flight`] graph the validator consumes: aircraft types are
//! classified once, airframes share their type, and flights share their
//! airframe.
//!
//! Empty strings are treated as absent values throughout.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::aircraft::{
    Aircraft, AircraftType, Category, Class, EngineType, SimulatedCategoryClass, SimulatorKind,
};
use crate::error::{ClassificationError, ClassificationField};
use crate::flight::{Checks, Crew, Flight, FlightId, FlightTimes, Operations};

/// Failure to turn logbook records into flights.
#[derive(Debug, Error)]
pub enum RecordError {
    /// An aircraft type carried unusable classification data.
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    /// An airframe references a type that was not supplied.
    #[error("aircraft {registration:?} references unknown aircraft type {type_id:?}")]
    UnknownAircraftType {
        /// Airframe registration.
        registration: String,
        /// Missing type identifier.
        type_id: String,
    },
    /// Two flight records share an identifier.
    #[error("duplicate flight id: {0}")]
    DuplicateFlight(FlightId),
    /// The logbook document is not valid JSON for [`Logbook`].
    #[error("logbook json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw aircraft type record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftTypeRecord {
    /// Logbook identifier.
    pub id: String,
    /// Type designator; defaults to `id` when absent.
    pub type_code: Option<String>,
    /// Category code (`flight_category1` … `flight_category12`).
    pub category: String,
    /// Class code (`flight_aircraftClass1` … `flight_aircraftClass9`).
    pub class: Option<String>,
    /// Engine code (`flight_engineType1` … `flight_engineType12`).
    pub engine_type: Option<String>,
    /// Device fidelity (`BATD`, `AATD`, `FTD`, `FFS`).
    pub sim_type: Option<String>,
    /// Simulated category and class (`ASEL`, `ASES`, `AMEL`, `AMES`, `GL`).
    pub sim_category: Option<String>,
}

impl AircraftTypeRecord {
    /// Classifies the record.
    pub fn resolve(&self) -> Result<AircraftType, ClassificationError> {
        let category = self
            .code(
                ClassificationField::Category,
                Some(&self.category),
                Category::from_code,
            )?
            .ok_or_else(|| self.unrecognized(ClassificationField::Category, ""))?;
        let class = self.code(
            ClassificationField::Class,
            self.class.as_ref(),
            Class::from_code,
        )?;
        if let Some(class) = class {
            if !class.is_valid_for(category) {
                return Err(ClassificationError::InvalidClass {
                    class,
                    category,
                    type_id: self.id.clone(),
                });
            }
        }
        let engine_type = self.code(
            ClassificationField::EngineType,
            self.engine_type.as_ref(),
            EngineType::from_code,
        )?;
        let simulator = self.code(
            ClassificationField::SimulatorType,
            self.sim_type.as_ref(),
            SimulatorKind::from_code,
        )?;
        let simulated = self.code(
            ClassificationField::SimulatorCategoryClass,
            self.sim_category.as_ref(),
            SimulatedCategoryClass::from_code,
        )?;
        if category == Category::Simulator && simulator.is_none() {
            return Err(ClassificationError::MissingSimulatorType {
                type_id: self.id.clone(),
            });
        }

        let designator = present(self.type_code.as_ref()).unwrap_or(self.id.as_str());
        let mut ty = AircraftType::new(self.id.clone(), designator, category, class);
        ty.engine_type = engine_type;
        ty.simulator = simulator;
        ty.simulated = simulated;
        Ok(ty)
    }

    /// Parses an optional code; absent or empty is `Ok(None)`, unknown is an error.
    fn code<T>(
        &self,
        field: ClassificationField,
        raw: Option<&String>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, ClassificationError> {
        present(raw)
            .map(|code| parse(code).ok_or_else(|| self.unrecognized(field, code)))
            .transpose()
    }

    fn unrecognized(&self, field: ClassificationField, code: &str) -> ClassificationError {
        ClassificationError::UnrecognizedCode {
            field,
            code: code.to_owned(),
            type_id: self.id.clone(),
        }
    }
}

/// Raw airframe record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftRecord {
    /// Registration (tail number).
    pub registration: String,
    /// Identifier of its [`AircraftTypeRecord`].
    pub aircraft_type: String,
    /// Maximum gross weight in pounds.
    pub weight: Option<f64>,
    /// Conventional gear.
    pub tailwheel: bool,
}

/// Raw flight record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Logbook identifier.
    pub id: String,
    /// Local date and time.
    pub date: NaiveDateTime,
    /// Registration of the airframe flown.
    #[serde(default)]
    pub aircraft: Option<String>,
    /// Departure identifier.
    #[serde(default)]
    pub origin: Option<String>,
    /// Arrival identifier.
    #[serde(default)]
    pub destination: Option<String>,
    /// Crew presence.
    #[serde(default)]
    pub crew: Crew,
    /// Passengers aboard.
    #[serde(default)]
    pub passengers: u32,
    /// Logged time in minutes.
    #[serde(default)]
    pub times: FlightTimes,
    /// Takeoffs, landings, approaches and holds.
    #[serde(default)]
    pub operations: Operations,
    /// Checks accomplished.
    #[serde(default)]
    pub checks: Checks,
    /// Free-form remarks.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// A complete normalized logbook export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logbook {
    /// Aircraft type records.
    pub aircraft_types: Vec<AircraftTypeRecord>,
    /// Airframe records.
    pub aircraft: Vec<AircraftRecord>,
    /// Flight records.
    pub flights: Vec<FlightRecord>,
}

impl Logbook {
    /// Resolves separately supplied record collections.
    pub fn from_records(
        aircraft_types: Vec<AircraftTypeRecord>,
        aircraft: Vec<AircraftRecord>,
        flights: Vec<FlightRecord>,
    ) -> Result<Vec<Flight>, RecordError> {
        Self {
            aircraft_types,
            aircraft,
            flights,
        }
        .resolve()
    }

    /// Parses a JSON logbook document and resolves it.
    pub fn from_json(json: &str) -> Result<Vec<Flight>, RecordError> {
        serde_json::from_str::<Self>(json)?.resolve()
    }

    /// Classifies every type, links airframes to types and flights to
    /// airframes.
    ///
    /// A flight whose aircraft reference is absent or unknown is kept with no
    /// aircraft; the rules treat it as unknowable rather than unlawful.
    pub fn resolve(self) -> Result<Vec<Flight>, RecordError> {
        let mut types = FxHashMap::default();
        for record in &self.aircraft_types {
            types.insert(record.id.as_str(), Arc::new(record.resolve()?));
        }

        let mut airframes = FxHashMap::default();
        for record in &self.aircraft {
            let ty = types.get(record.aircraft_type.as_str()).ok_or_else(|| {
                RecordError::UnknownAircraftType {
                    registration: record.registration.clone(),
                    type_id: record.aircraft_type.clone(),
                }
            })?;
            let mut aircraft = Aircraft::new(record.registration.clone(), Arc::clone(ty));
            aircraft.weight = record.weight;
            aircraft.tailwheel = record.tailwheel;
            airframes.insert(record.registration.as_str(), Arc::new(aircraft));
        }

        let mut seen = FxHashSet::default();
        let mut flights = Vec::with_capacity(self.flights.len());
        for record in self.flights {
            let id = FlightId::new(record.id);
            if !seen.insert(id.clone()) {
                return Err(RecordError::DuplicateFlight(id));
            }
            let aircraft = match present(record.aircraft.as_ref()) {
                Some(registration) => {
                    let found = airframes.get(registration).cloned();
                    if found.is_none() {
                        warn!(flight = %id, registration, "flight references unknown aircraft");
                    }
                    found
                }
                None => None,
            };
            flights.push(Flight {
                id,
                aircraft,
                date: record.date,
                origin: record.origin.filter(|s| !s.is_empty()),
                destination: record.destination.filter(|s| !s.is_empty()),
                crew: record.crew,
                passengers: record.passengers,
                times: record.times,
                operations: record.operations,
                checks: record.checks,
                remarks: record.remarks.filter(|s| !s.is_empty()),
            });
        }
        Ok(flights)
    }
}

fn present(raw: Option<&String>) -> Option<&str> {
    raw.map(String::as_str).filter(|s| !s.is_empty())
}
