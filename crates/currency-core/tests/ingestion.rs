// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Normalized logbook exports resolved and validated end to end.

#![allow(missing_docs)]
#![allow(clippy::expect_used)]

use currency_core::record::{AircraftRecord, AircraftTypeRecord};
use currency_core::{
    validate, Category, Class, ClassificationError, EngineType, Logbook, RecordError,
    SimulatorKind,
};
use serde_json::json;

fn logbook() -> serde_json::Value {
    json!({
        "aircraft_types": [
            {
                "id": "C172",
                "category": "flight_category1",
                "class": "flight_aircraftClass2",
                "engine_type": "flight_engineType4"
            },
            {
                "id": "b737-800",
                "type_code": "B738",
                "category": "flight_category1",
                "class": "flight_aircraftClass1",
                "engine_type": "flight_engineType7"
            },
            {
                "id": "sim-b738",
                "type_code": "B738",
                "category": "flight_category6",
                "sim_type": "FFS",
                "sim_category": "AMEL"
            }
        ],
        "aircraft": [
            { "registration": "N172SP", "aircraft_type": "C172" },
            { "registration": "N738AL", "aircraft_type": "b737-800", "weight": 174200.0 },
            { "registration": "SIM-1", "aircraft_type": "sim-b738" }
        ],
        "flights": [
            {
                "id": "review",
                "date": "2024-01-05T09:00:00",
                "aircraft": "N172SP",
                "times": { "dual_received": 60 },
                "operations": { "day_takeoffs": 1, "day_landings": 1, "full_stop_landings": 1 },
                "checks": { "flight_review": true }
            },
            {
                "id": "sim-check",
                "date": "2024-02-10T09:00:00",
                "aircraft": "SIM-1",
                "times": { "pic": 120 },
                "operations": { "day_takeoffs": 3, "day_landings": 3, "full_stop_landings": 3 },
                "checks": { "proficiency_check": true }
            },
            {
                "id": "line",
                "date": "2024-03-01T14:00:00",
                "aircraft": "N738AL",
                "origin": "KSEA",
                "destination": "KSFO",
                "passengers": 160,
                "times": { "pic": 130 },
                "operations": { "day_takeoffs": 1, "day_landings": 1, "full_stop_landings": 1 },
                "remarks": "first leg after sim"
            },
            {
                "id": "unknown-tail",
                "date": "2024-03-02T14:00:00",
                "aircraft": "N999ZZ",
                "passengers": 2,
                "times": { "pic": 60 }
            }
        ]
    })
}

#[test]
fn export_resolves_into_typed_flights() {
    let flights = Logbook::from_json(&logbook().to_string()).expect("valid logbook");
    assert_eq!(flights.len(), 4);

    let line = flights
        .iter()
        .find(|f| f.id.as_str() == "line")
        .expect("line flight");
    let aircraft = line.aircraft().expect("resolved aircraft");
    assert_eq!(aircraft.aircraft_type.designator, "B738");
    assert_eq!(aircraft.aircraft_type.class, Some(Class::MultiEngineLand));
    assert_eq!(
        aircraft.aircraft_type.engine_type,
        Some(EngineType::Turbofan)
    );
    assert!(aircraft.requires_type_rating());
    assert_eq!(line.origin.as_deref(), Some("KSEA"));
    assert_eq!(line.remarks.as_deref(), Some("first leg after sim"));

    let sim = flights
        .iter()
        .find(|f| f.id.as_str() == "sim-check")
        .expect("sim flight");
    let device = &sim.aircraft().expect("resolved device").aircraft_type;
    assert_eq!(device.category, Category::Simulator);
    assert_eq!(device.simulator, Some(SimulatorKind::Ffs));
    assert!(device.is_full_flight_simulator());
    assert_eq!(device.simulated_class(), Some(Class::MultiEngineLand));

    let orphan = flights
        .iter()
        .find(|f| f.id.as_str() == "unknown-tail")
        .expect("orphan flight kept");
    assert!(orphan.aircraft().is_none());
}

#[test]
fn resolved_export_validates() {
    let flights = Logbook::from_json(&logbook().to_string()).expect("valid logbook");
    let found = validate(flights).expect("validation run");

    // The FFS session supplies the line flight's landings and 61.58 check, the
    // review is dual, the device is not type-rated and the orphan is unknowable.
    assert!(found.is_empty(), "{found:?}");
}

#[test]
fn unknown_code_names_the_type() {
    let mut doc = logbook();
    doc["aircraft_types"][0]["engine_type"] = json!("flight_engineType42");
    let err = Logbook::from_json(&doc.to_string()).expect_err("unknown engine");
    assert!(matches!(
        err,
        RecordError::Classification(ClassificationError::UnrecognizedCode {
            ref code,
            ref type_id,
            ..
        }) if code == "flight_engineType42" && type_id == "C172"
    ));
}

#[test]
fn airframe_with_unknown_type_is_rejected() {
    let err = Logbook::from_records(
        Vec::new(),
        vec![AircraftRecord {
            registration: "N1".into(),
            aircraft_type: "missing".into(),
            ..AircraftRecord::default()
        }],
        Vec::new(),
    )
    .expect_err("dangling type");
    assert!(matches!(
        err,
        RecordError::UnknownAircraftType { ref type_id, .. } if type_id == "missing"
    ));
}

#[test]
fn simulator_without_kind_is_rejected() {
    let record = AircraftTypeRecord {
        id: "sim".into(),
        category: "flight_category6".into(),
        ..AircraftTypeRecord::default()
    };
    let err = Logbook::from_records(vec![record], Vec::new(), Vec::new()).expect_err("no kind");
    assert!(matches!(
        err,
        RecordError::Classification(ClassificationError::MissingSimulatorType { .. })
    ));
}

#[test]
fn duplicate_flight_ids_are_rejected() {
    let mut doc = logbook();
    doc["flights"][1]["id"] = json!("review");
    let err = Logbook::from_json(&doc.to_string()).expect_err("duplicate");
    assert!(matches!(
        err,
        RecordError::DuplicateFlight(ref id) if id.as_str() == "review"
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = Logbook::from_json("{ \"flights\": [ { \"id\": 7 } ] }").expect_err("bad shape");
    assert!(matches!(err, RecordError::Json(_)));
}
