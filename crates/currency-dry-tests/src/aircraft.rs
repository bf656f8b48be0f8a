// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Aircraft presets.
//!
//! Each preset returns a fresh `Arc<Aircraft>`; flights built from the same
//! preset compare equal on designator, category and class, which is all the
//! match criteria look at.

use std::sync::Arc;

use currency_core::{
    Aircraft, AircraftType, Category, Class, EngineType, SimulatedCategoryClass, SimulatorKind,
};

/// Builder for [`Aircraft`] in tests.
///
/// All methods take `self` by value and return `Self` for chaining.
#[derive(Debug, Clone)]
pub struct AircraftBuilder {
    registration: String,
    ty: AircraftType,
    weight: Option<f64>,
    tailwheel: bool,
}

impl AircraftBuilder {
    /// A real aircraft whose type id is its designator.
    pub fn new(
        registration: &str,
        designator: &str,
        category: Category,
        class: Option<Class>,
    ) -> Self {
        Self {
            registration: registration.to_owned(),
            ty: AircraftType::new(designator, designator, category, class),
            weight: None,
            tailwheel: false,
        }
    }

    /// A simulator-category device of `kind` standing in for `designator`.
    pub fn device(
        designator: &str,
        kind: SimulatorKind,
        simulated: SimulatedCategoryClass,
    ) -> Self {
        let mut builder = Self::new(
            &format!("SIM-{designator}"),
            designator,
            Category::Simulator,
            None,
        );
        builder.ty.id = format!("sim-{designator}");
        builder.ty.simulator = Some(kind);
        builder.ty.simulated = Some(simulated);
        builder
    }

    /// Sets the powerplant.
    pub fn engine(mut self, engine: EngineType) -> Self {
        self.ty.engine_type = Some(engine);
        self
    }

    /// Sets the gross weight in pounds.
    pub fn weight(mut self, pounds: f64) -> Self {
        self.weight = Some(pounds);
        self
    }

    /// Conventional gear.
    pub fn tailwheel(mut self) -> Self {
        self.tailwheel = true;
        self
    }

    /// Builds the shared airframe.
    pub fn build(self) -> Arc<Aircraft> {
        let mut aircraft = Aircraft::new(self.registration, Arc::new(self.ty));
        aircraft.weight = self.weight;
        aircraft.tailwheel = self.tailwheel;
        Arc::new(aircraft)
    }
}

/// Single-engine land piston trainer.
pub fn cessna_172() -> Arc<Aircraft> {
    AircraftBuilder::new(
        "N172SP",
        "C172",
        Category::Airplane,
        Some(Class::SingleEngineLand),
    )
    .engine(EngineType::Reciprocating)
    .build()
}

/// Single-engine land tailwheel.
pub fn piper_cub() -> Arc<Aircraft> {
    AircraftBuilder::new(
        "N3J",
        "J3",
        Category::Airplane,
        Some(Class::SingleEngineLand),
    )
    .engine(EngineType::Reciprocating)
    .tailwheel()
    .build()
}

/// Multi-engine land piston twin (no type rating).
pub fn baron() -> Arc<Aircraft> {
    AircraftBuilder::new(
        "N58BE",
        "BE58",
        Category::Airplane,
        Some(Class::MultiEngineLand),
    )
    .engine(EngineType::Reciprocating)
    .build()
}

/// Multi-engine land turbofan (type-rated).
pub fn boeing_737() -> Arc<Aircraft> {
    AircraftBuilder::new(
        "N738AL",
        "B738",
        Category::Airplane,
        Some(Class::MultiEngineLand),
    )
    .engine(EngineType::Turbofan)
    .weight(174_200.0)
    .build()
}

/// Piston helicopter.
pub fn robinson_r44() -> Arc<Aircraft> {
    AircraftBuilder::new(
        "N44RH",
        "R44",
        Category::Rotorcraft,
        Some(Class::Helicopter),
    )
    .engine(EngineType::Reciprocating)
    .build()
}

/// Full flight simulator for `designator` in `simulated` category/class.
pub fn full_flight_simulator(
    designator: &str,
    simulated: SimulatedCategoryClass,
) -> Arc<Aircraft> {
    AircraftBuilder::device(designator, SimulatorKind::Ffs, simulated).build()
}

/// Flight training device for `designator`; never earns aircraft credit.
pub fn training_device(designator: &str, simulated: SimulatedCategoryClass) -> Arc<Aircraft> {
    AircraftBuilder::device(designator, SimulatorKind::Ftd, simulated).build()
}
